//! API 라우트 설정 모듈
//!
//! 엔드포인트를 기능별로 묶고, 묶음마다 인증 수준을 정합니다.
//!
//! ## 인증 불필요
//! - `GET /health`
//! - `POST /signup`, `POST /login`
//!
//! ## 인증 필수 (`AuthMiddleware::required`)
//! - `/api/v1/members/**`
//!
//! ## 선택 인증 (`AuthMiddleware::optional`)
//! - `/api/v1/posts/**`: 조회는 누구나, 작성/수정/삭제/좋아요는 핸들러에서 회원을 요구합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new()
//!     .configure(|cfg| state.register(cfg))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{error, get, web, HttpResponse};
use serde_json::json;

use crate::errors::AppError;
use crate::handlers;
use crate::middlewares::AuthMiddleware;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    configure_extractors(cfg);

    cfg.service(health_check);

    configure_member_routes(cfg);
    configure_post_routes(cfg);
}

/// JSON 본문과 쿼리 파싱 실패도 다른 오류와 같은 JSON 형식으로 응답합니다.
fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        error::Error::from(AppError::ValidationError(format!("요청 본문 오류: {}", err)))
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        error::Error::from(AppError::ValidationError(format!("쿼리 파라미터 오류: {}", err)))
    }));
}

/// 회원 관련 라우트
///
/// ```bash
/// # 로그인
/// curl -X POST http://localhost:8080/login \
///   -H "Content-Type: application/json" \
///   -d '{"email":"user@gmail.com","password":"password1!"}'
///
/// # 내 정보 (Bearer 토큰 필요)
/// curl http://localhost:8080/api/v1/members/me -H "Authorization: Bearer $TOKEN"
/// ```
fn configure_member_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::members::signup)
        .service(handlers::members::login);

    cfg.service(
        web::scope("/api/v1/members")
            .wrap(AuthMiddleware::required())
            .service(handlers::members::get_me)
            .service(handlers::members::update_me)
            .service(handlers::members::change_my_image)
            .service(handlers::members::delete_me)
            .service(handlers::members::get_member),
    );
}

fn configure_post_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/posts")
            .wrap(AuthMiddleware::optional())
            .service(handlers::posts::create_post)
            .service(handlers::posts::list_posts)
            .service(handlers::posts::get_post)
            .service(handlers::posts::update_post)
            .service(handlers::posts::delete_post)
            .service(handlers::posts::like_post)
            .service(handlers::posts::unlike_post),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "social_post_backend",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00Z"
/// }
/// ```
#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "social_post_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "storage": "S3",
            "auth": "JWT (HS256)"
        }
    }))
}
