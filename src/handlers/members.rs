//! # Member HTTP Handlers
//!
//! 회원 가입, 로그인, 내 정보 관리 엔드포인트입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/signup` | 회원 가입 | 200 OK |
//! | `POST` | `/login` | 로그인, 액세스 토큰 발급 | 201 Created |
//! | `GET` | `/api/v1/members/me` | 내 정보 조회 | 200 OK |
//! | `PUT` | `/api/v1/members/me` | 내 정보 수정 | 200 OK |
//! | `PUT` | `/api/v1/members/me/image` | 프로필 이미지 변경 (multipart `image`) | 200 OK |
//! | `DELETE` | `/api/v1/members/me` | 회원 탈퇴 | 204 No Content |
//! | `GET` | `/api/v1/members/{member_id}` | 회원 조회 | 200 OK |
//!
//! ```bash
//! curl -X POST http://localhost:8080/signup \
//!   -H "Content-Type: application/json" \
//!   -d '{"name":"홍길동","email":"user@gmail.com","password":"password1!",
//!        "nickname":"길동","phone_number":"010-1234-5678"}'
//! ```

use actix_multipart::Multipart;
use actix_web::{delete, get, post, put, web, HttpResponse};
use mongodb::bson::oid::ObjectId;

use crate::domain::dto::members::{LoginRequest, SignupRequest, UpdateMemberRequest};
use crate::domain::models::auth::AuthenticatedMember;
use crate::errors::AppError;
use crate::handlers::multipart::read_multipart;
use crate::services::members::MemberService;

#[post("/signup")]
pub async fn signup(
    service: web::Data<MemberService>,
    payload: web::Json<SignupRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.signup(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 로그인 성공 시 `201 Created`와 함께 액세스 토큰을 돌려줍니다.
#[post("/login")]
pub async fn login(
    service: web::Data<MemberService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.login(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

#[get("/me")]
pub async fn get_me(
    member: AuthenticatedMember,
    service: web::Data<MemberService>,
) -> Result<HttpResponse, AppError> {
    let response = service.get_member(&member.object_id()?).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[put("/me")]
pub async fn update_me(
    member: AuthenticatedMember,
    service: web::Data<MemberService>,
    payload: web::Json<UpdateMemberRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service
        .update_profile(&member.object_id()?, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

#[put("/me/image")]
pub async fn change_my_image(
    member: AuthenticatedMember,
    service: web::Data<MemberService>,
    payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let file = read_multipart(payload).await?.into_single_file()?;
    let response = service.change_profile_image(&member.object_id()?, file).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[delete("/me")]
pub async fn delete_me(
    member: AuthenticatedMember,
    service: web::Data<MemberService>,
) -> Result<HttpResponse, AppError> {
    service.delete_member(&member.object_id()?).await?;

    Ok(HttpResponse::NoContent().finish())
}

#[get("/{member_id}")]
pub async fn get_member(
    member_id: web::Path<String>,
    service: web::Data<MemberService>,
) -> Result<HttpResponse, AppError> {
    let member_id = ObjectId::parse_str(member_id.as_str())
        .map_err(|_| AppError::NotFound("회원을 찾을 수 없습니다".to_string()))?;
    let response = service.get_member(&member_id).await?;

    Ok(HttpResponse::Ok().json(response))
}
