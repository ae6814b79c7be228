//! JWT 토큰 발급/검증 서비스
//!
//! HS256으로 서명한 액세스 토큰을 발급하고 검증합니다.
//! 클레임은 `iss`(발급자), `sub`(이메일), `id`(회원 ID), `iat`, `exp`로 구성됩니다.
//!
//! 검증은 서명, 만료(leeway 없음), 발급자를 모두 확인하며
//! 어떤 실패든 `AppError::AuthenticationError`(401)로 변환됩니다.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use log::warn;

use crate::config::JwtConfig;
use crate::domain::entities::members::Member;
use crate::domain::models::auth::AuthenticatedMember;
use crate::domain::models::token::TokenClaims;
use crate::errors::{AppError, AppResult};

pub struct TokenProvider {
    issuer: String,
    expiration: Duration,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenProvider {
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

        Self {
            issuer: config.issuer.clone(),
            expiration: config.expiration(),
            encoding_key: EncodingKey::from_secret(config.secret_key.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret_key.as_bytes()),
            validation,
        }
    }

    /// 설정된 만료 시간으로 액세스 토큰을 발급합니다.
    pub fn create_access_token(&self, email: &str, member_id: &str) -> AppResult<String> {
        self.generate_token_at(email, member_id, Utc::now(), self.expiration)
    }

    /// 회원에 대해 지정한 유효 기간의 토큰을 발급합니다.
    pub fn generate_token(&self, member: &Member, ttl: Duration) -> AppResult<String> {
        let member_id = member
            .id_string()
            .ok_or_else(|| AppError::InternalError("회원 ID가 없습니다".to_string()))?;

        self.generate_token_at(&member.email, &member_id, Utc::now(), ttl)
    }

    /// 발급 시각을 지정해 토큰을 만듭니다. 같은 입력이면 같은 토큰이 나옵니다.
    pub fn generate_token_at(
        &self,
        email: &str,
        member_id: &str,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> AppResult<String> {
        let claims = TokenClaims {
            iss: self.issuer.clone(),
            sub: email.to_string(),
            id: member_id.to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 액세스 토큰 유효 기간 (초)
    pub fn expires_in(&self) -> i64 {
        self.expiration.num_seconds()
    }

    /// 서명, 만료, 발급자를 검증합니다. 실패 사유는 로그로만 남깁니다.
    pub fn valid_token(&self, token: &str) -> bool {
        match self.get_claims(token) {
            Ok(_) => true,
            Err(e) => {
                warn!("토큰 검증 실패: {}", e);
                false
            }
        }
    }

    pub fn get_claims(&self, token: &str) -> AppResult<TokenClaims> {
        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| {
                let reason = match e.kind() {
                    ErrorKind::ExpiredSignature => "토큰이 만료되었습니다",
                    ErrorKind::InvalidSignature => "토큰 서명이 올바르지 않습니다",
                    ErrorKind::InvalidIssuer => "토큰 발급자가 올바르지 않습니다",
                    _ => "유효하지 않은 토큰입니다",
                };
                AppError::AuthenticationError(reason.to_string())
            })
    }

    pub fn get_member_id(&self, token: &str) -> AppResult<String> {
        Ok(self.get_claims(token)?.id)
    }

    /// 토큰에서 인증 주체를 만듭니다. 주체의 식별자는 이메일(`sub`)입니다.
    pub fn get_authentication(&self, token: &str) -> AppResult<AuthenticatedMember> {
        let claims = self.get_claims(token)?;

        Ok(AuthenticatedMember {
            member_id: claims.id,
            email: claims.sub,
        })
    }

    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        match auth_header.strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => Ok(token.trim()),
            _ => Err(AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    fn config() -> JwtConfig {
        JwtConfig {
            secret_key: "test-secret-key".to_string(),
            issuer: "test-issuer".to_string(),
            expiration_hours: 1,
        }
    }

    fn saved_member() -> Member {
        let mut member = Member::new(
            "홍길동".to_string(),
            "user@gmail.com".to_string(),
            "hash".to_string(),
            "길동".to_string(),
            "01012345678".to_string(),
        );
        member.id = Some(ObjectId::new());
        member
    }

    #[test]
    fn test_access_token_carries_member_id() {
        let provider = TokenProvider::new(&config());
        let member_id = ObjectId::new().to_hex();

        let token = provider.create_access_token("user@email.com", &member_id).unwrap();

        assert_eq!(provider.get_member_id(&token).unwrap(), member_id);
        let claims = provider.get_claims(&token).unwrap();
        assert_eq!(claims.iss, "test-issuer");
        assert_eq!(claims.sub, "user@email.com");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_expired_token_is_invalid() {
        let provider = TokenProvider::new(&config());
        let issued_at = Utc::now() - Duration::days(14);

        let token = provider
            .generate_token_at("user@gmail.com", "id", issued_at, Duration::days(7))
            .unwrap();

        assert!(!provider.valid_token(&token));
        assert!(matches!(
            provider.get_claims(&token),
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[test]
    fn test_fresh_token_is_valid() {
        let provider = TokenProvider::new(&config());
        let token = provider.generate_token(&saved_member(), Duration::hours(1)).unwrap();

        assert!(provider.valid_token(&token));
    }

    #[test]
    fn test_tampered_token_is_invalid() {
        let provider = TokenProvider::new(&config());
        let token = provider.generate_token(&saved_member(), Duration::hours(1)).unwrap();

        let mut tampered = token.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'A' { 'B' } else { 'A' });

        assert!(!provider.valid_token(&tampered));
        assert!(!provider.valid_token("not.a.token"));
    }

    #[test]
    fn test_token_from_other_secret_or_issuer_is_invalid() {
        let provider = TokenProvider::new(&config());

        let other_secret = TokenProvider::new(&JwtConfig {
            secret_key: "another-secret".to_string(),
            ..config()
        });
        let other_issuer = TokenProvider::new(&JwtConfig {
            issuer: "someone-else".to_string(),
            ..config()
        });

        let member = saved_member();
        let forged = other_secret.generate_token(&member, Duration::hours(1)).unwrap();
        let foreign = other_issuer.generate_token(&member, Duration::hours(1)).unwrap();

        assert!(!provider.valid_token(&forged));
        assert!(!provider.valid_token(&foreign));
    }

    #[test]
    fn test_authentication_principal_is_email() {
        let provider = TokenProvider::new(&config());
        let member = saved_member();
        let token = provider.generate_token(&member, Duration::hours(1)).unwrap();

        let authentication = provider.get_authentication(&token).unwrap();
        assert_eq!(authentication.email, "user@gmail.com");
        assert_eq!(Some(authentication.member_id), member.id_string());
    }

    #[test]
    fn test_same_claims_produce_same_token() {
        let provider = TokenProvider::new(&config());
        let issued_at = Utc::now();

        let a = provider.generate_token_at("a@b.com", "id", issued_at, Duration::hours(1)).unwrap();
        let b = provider.generate_token_at("a@b.com", "id", issued_at, Duration::hours(1)).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_extract_bearer_token() {
        let provider = TokenProvider::new(&config());

        assert_eq!(provider.extract_bearer_token("Bearer abc.def").unwrap(), "abc.def");
        assert!(provider.extract_bearer_token("Basic abc").is_err());
        assert!(provider.extract_bearer_token("Bearer ").is_err());
    }
}
