use std::future::{ready, Ready};

use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::errors::{authentication_required_response, AppError};

/// JWT 토큰에서 추출된 회원 정보
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthenticatedMember {
    /// 회원 고유 ID (ObjectId hex)
    pub member_id: String,

    /// 토큰 주체(sub)인 이메일
    pub email: String,
}

impl AuthenticatedMember {
    pub fn object_id(&self) -> Result<ObjectId, AppError> {
        ObjectId::parse_str(&self.member_id)
            .map_err(|_| AppError::AuthenticationError("토큰의 회원 ID가 올바르지 않습니다".to_string()))
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedMember {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedMember>() {
            Some(member) => ready(Ok(member.clone())),
            None => ready(Err(actix_web::error::InternalError::from_response(
                "인증되지 않은 요청입니다",
                authentication_required_response(),
            )
            .into())),
        }
    }
}

/// 선택적 인증 회원 추출자
#[derive(Debug, Clone)]
pub struct OptionalMember(pub Option<AuthenticatedMember>);

impl FromRequest for OptionalMember {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let member = req.extensions().get::<AuthenticatedMember>().cloned();
        ready(Ok(OptionalMember(member)))
    }
}
