//! 미들웨어 모듈
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - `Authorization: Bearer <token>` 헤더의 JWT 검증
//! - 인증된 회원 정보를 request extension에 저장
//! - 필수/선택 인증 모드 지원
//!
//! ```rust,ignore
//! App::new()
//!     .app_data(token_provider.clone())
//!     .service(
//!         web::scope("/api/v1/members")
//!             .wrap(AuthMiddleware::required())
//!             .route("/me", web::get().to(get_me))
//!     )
//! ```
//!
//! 검증에 쓰는 [`TokenProvider`](crate::services::auth::TokenProvider)는
//! `web::Data`로 앱에 등록되어 있어야 합니다.

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
