//! # Post HTTP Handlers
//!
//! | 메서드 | 경로 | 인증 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/posts` | 필수 | 201 Created |
//! | `GET` | `/api/v1/posts` | 선택 | 200 OK |
//! | `GET` | `/api/v1/posts/{post_id}` | 선택 | 200 OK |
//! | `PUT` | `/api/v1/posts/{post_id}` | 필수 (작성자) | 200 OK |
//! | `DELETE` | `/api/v1/posts/{post_id}` | 필수 (작성자) | 204 No Content |
//! | `POST` | `/api/v1/posts/{post_id}/like` | 필수 | 200 OK |
//! | `DELETE` | `/api/v1/posts/{post_id}/like` | 필수 | 200 OK |
//!
//! 게시글 작성은 multipart 요청입니다.
//!
//! ```bash
//! curl -X POST http://localhost:8080/api/v1/posts \
//!   -H "Authorization: Bearer $TOKEN" \
//!   -F 'post={"content":"바다","location":"Busan","hashtags":["여행"]};type=application/json' \
//!   -F 'files=@beach.jpg'
//! ```

use actix_multipart::Multipart;
use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::domain::dto::posts::{PostListQuery, PostRequest, PostUpdateRequest};
use crate::domain::models::auth::{AuthenticatedMember, OptionalMember};
use crate::errors::AppError;
use crate::handlers::multipart::read_multipart;
use crate::services::posts::PostService;

#[post("")]
pub async fn create_post(
    member: AuthenticatedMember,
    service: web::Data<PostService>,
    payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let parts = read_multipart(payload).await?;
    let request: PostRequest = parts.parse_json()?;

    let response = service
        .create_post(&member.object_id()?, request, parts.files)
        .await?;

    Ok(HttpResponse::Created().json(response))
}

#[get("")]
pub async fn list_posts(
    viewer: OptionalMember,
    service: web::Data<PostService>,
    query: web::Query<PostListQuery>,
) -> Result<HttpResponse, AppError> {
    let viewer_id = viewer.0.as_ref().and_then(|m| m.object_id().ok());
    let response = service.list_posts(&query, viewer_id.as_ref()).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[get("/{post_id}")]
pub async fn get_post(
    post_id: web::Path<String>,
    viewer: OptionalMember,
    service: web::Data<PostService>,
) -> Result<HttpResponse, AppError> {
    let viewer_id = viewer.0.as_ref().and_then(|m| m.object_id().ok());
    let response = service.get_post(&post_id, viewer_id.as_ref()).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[put("/{post_id}")]
pub async fn update_post(
    post_id: web::Path<String>,
    member: AuthenticatedMember,
    service: web::Data<PostService>,
    payload: web::Json<PostUpdateRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service
        .update_post(&member.object_id()?, &post_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

#[delete("/{post_id}")]
pub async fn delete_post(
    post_id: web::Path<String>,
    member: AuthenticatedMember,
    service: web::Data<PostService>,
) -> Result<HttpResponse, AppError> {
    service.delete_post(&member.object_id()?, &post_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

#[post("/{post_id}/like")]
pub async fn like_post(
    post_id: web::Path<String>,
    member: AuthenticatedMember,
    service: web::Data<PostService>,
) -> Result<HttpResponse, AppError> {
    let response = service.like_post(&member.object_id()?, &post_id).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[delete("/{post_id}/like")]
pub async fn unlike_post(
    post_id: web::Path<String>,
    member: AuthenticatedMember,
    service: web::Data<PostService>,
) -> Result<HttpResponse, AppError> {
    let response = service.unlike_post(&member.object_id()?, &post_id).await?;

    Ok(HttpResponse::Ok().json(response))
}
