//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 JWT 토큰을 검증하고 회원 정보를 추출합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::domain::models::auth::AuthMode;
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// JWT 인증 미들웨어
pub struct AuthMiddleware {
    /// 인증 모드 (Required/Optional)
    mode: AuthMode,
}

impl AuthMiddleware {
    pub fn new(mode: AuthMode) -> Self {
        Self { mode }
    }

    /// 토큰이 없거나 유효하지 않으면 401로 응답합니다.
    pub fn required() -> Self {
        Self::new(AuthMode::Required)
    }

    /// 유효한 토큰이 있을 때만 회원 정보를 채우고, 없어도 요청을 진행합니다.
    pub fn optional() -> Self {
        Self::new(AuthMode::Optional)
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            mode: self.mode.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};
    use chrono::{Duration, Utc};

    use crate::config::JwtConfig;
    use crate::domain::models::auth::{AuthenticatedMember, OptionalMember};
    use crate::services::auth::TokenProvider;

    fn token_provider() -> web::Data<TokenProvider> {
        web::Data::new(TokenProvider::new(&JwtConfig {
            secret_key: "middleware-secret".to_string(),
            issuer: "test-issuer".to_string(),
            expiration_hours: 1,
        }))
    }

    async fn whoami(member: AuthenticatedMember) -> HttpResponse {
        HttpResponse::Ok().body(member.email)
    }

    async fn maybe_whoami(member: OptionalMember) -> HttpResponse {
        match member.0 {
            Some(member) => HttpResponse::Ok().body(member.email),
            None => HttpResponse::Ok().body("anonymous"),
        }
    }

    #[actix_web::test]
    async fn test_required_rejects_missing_token() {
        let app = test::init_service(
            App::new()
                .app_data(token_provider())
                .service(web::scope("/private").wrap(AuthMiddleware::required()).route("", web::get().to(whoami))),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/private").to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "authentication_required");
    }

    #[actix_web::test]
    async fn test_required_accepts_valid_token() {
        let tokens = token_provider();
        let token = tokens.create_access_token("user@gmail.com", "id").unwrap();
        let app = test::init_service(
            App::new()
                .app_data(tokens.clone())
                .service(web::scope("/private").wrap(AuthMiddleware::required()).route("", web::get().to(whoami))),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/private")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;

        assert_eq!(body, "user@gmail.com");
    }

    #[actix_web::test]
    async fn test_required_rejects_expired_token() {
        let tokens = token_provider();
        let token = tokens
            .generate_token_at("user@gmail.com", "id", Utc::now() - Duration::days(14), Duration::days(7))
            .unwrap();
        let app = test::init_service(
            App::new()
                .app_data(tokens.clone())
                .service(web::scope("/private").wrap(AuthMiddleware::required()).route("", web::get().to(whoami))),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/private")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_optional_passes_without_token() {
        let app = test::init_service(
            App::new()
                .app_data(token_provider())
                .service(web::scope("/feed").wrap(AuthMiddleware::optional()).route("", web::get().to(maybe_whoami))),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/feed")
            .insert_header(("Authorization", "Bearer broken"))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;

        assert_eq!(body, "anonymous");
    }
}
