use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

use crate::domain::entities::members::{Gender, Member, Role};

/// 회원 정보 응답. 비밀번호 해시는 포함하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub address: Option<String>,
    pub image_url: String,
    pub nickname: String,
    pub role: Role,
    pub phone_number: String,
    pub gender: Option<Gender>,
    pub message: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        let Member {
            id,
            name,
            email,
            address,
            image_url,
            nickname,
            role,
            phone_number,
            gender,
            message,
            created_at,
            updated_at,
            ..
        } = member;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            email,
            address,
            image_url,
            nickname,
            role,
            phone_number,
            gender,
            message,
            created_at: rfc3339(created_at),
            updated_at: rfc3339(updated_at),
        }
    }
}

/// 회원 가입 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupResponse {
    pub message: String,
    pub member: MemberResponse,
}

/// 로그인 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    /// 만료까지 남은 시간 (초)
    pub expires_in: i64,
    pub member: MemberResponse,
}

pub(crate) fn rfc3339(value: DateTime) -> String {
    value.try_to_rfc3339_string().unwrap_or_default()
}
