//! JWT 인증 토큰 클레임

use serde::{Deserialize, Serialize};

/// JWT 토큰의 클레임(Payload) 구조체
///
/// ## 클레임 구성
///
/// - `iss`: 발급자
/// - `sub`: 토큰의 주체 (회원 이메일)
/// - `id`: 회원 ID
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub iss: String,
    pub sub: String,
    pub id: String,
    pub iat: i64,
    pub exp: i64,
}
