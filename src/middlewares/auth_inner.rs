//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{web, Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;

use crate::domain::models::auth::{AuthMode, AuthenticatedMember};
use crate::errors::{authentication_required_response, AppError, AppResult};
use crate::services::auth::TokenProvider;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub mode: AuthMode,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let mode = self.mode.clone();

        Box::pin(async move {
            let auth_result = match req.app_data::<web::Data<TokenProvider>>() {
                Some(token_provider) => authenticate(&req, token_provider),
                None => Err(AppError::InternalError("TokenProvider가 등록되지 않았습니다".to_string())),
            };

            match (&mode, auth_result) {
                (_, Err(AppError::InternalError(message))) => {
                    log::error!("인증 처리 불가: {}", message);
                    let response = HttpResponse::InternalServerError()
                        .json(serde_json::json!({ "error": "Internal server error" }));
                    let (req, _) = req.into_parts();
                    return Ok(ServiceResponse::new(req, response).map_into_right_body());
                }
                (AuthMode::Required, Err(err)) => {
                    log::warn!("인증 실패: {} {} - {}", req.method(), req.path(), err);
                    let response = authentication_required_response();
                    let (req, _) = req.into_parts();
                    return Ok(ServiceResponse::new(req, response).map_into_right_body());
                }
                (_, Ok(member)) => {
                    log::debug!("인증 성공: 회원 ID {}", member.member_id);
                    req.extensions_mut().insert(member);
                }
                (AuthMode::Optional, Err(_)) => {
                    log::debug!("선택적 인증: 유효한 토큰 없음, 요청 진행");
                }
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// Authorization 헤더의 Bearer 토큰을 검증하고 인증 주체를 만듭니다.
fn authenticate(req: &ServiceRequest, token_provider: &TokenProvider) -> AppResult<AuthenticatedMember> {
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("Authorization 헤더가 없습니다".to_string()))?;

    let token = token_provider.extract_bearer_token(auth_header)?;
    token_provider.get_authentication(token)
}
