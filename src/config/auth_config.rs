//! # Authentication Configuration Module
//!
//! JWT 서명 키, 발급자(issuer), 만료 시간을 관리합니다.
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_ISSUER="social-post-backend"
//! export JWT_EXPIRATION_HOURS="1"
//! ```

use std::env;

use chrono::Duration;
use log::warn;

use super::env_or;

const DEFAULT_EXPIRATION_HOURS: i64 = 1;
/// 액세스 토큰 만료 시간 상한 (1년)
const MAX_EXPIRATION_HOURS: i64 = 24 * 365;

/// JWT 토큰 설정
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HS256 서명 키
    pub secret_key: String,
    /// `iss` 클레임 값
    pub issuer: String,
    /// 액세스 토큰 만료 시간 (시간 단위)
    pub expiration_hours: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        let secret_key = env::var("JWT_SECRET").unwrap_or_else(|_| {
            warn!("⚠️ JWT_SECRET이 설정되지 않았습니다. 개발용 기본값을 사용합니다");
            "development-only-jwt-secret-change-me".to_string()
        });

        Self {
            secret_key,
            issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| "social-post-backend".to_string()),
            expiration_hours: clamp_expiration_hours(env_or(
                "JWT_EXPIRATION_HOURS",
                DEFAULT_EXPIRATION_HOURS,
            )),
        }
    }

    /// 액세스 토큰 유효 기간. 범위를 벗어난 값은 1시간~1년으로 맞춥니다.
    pub fn expiration(&self) -> Duration {
        Duration::try_hours(clamp_expiration_hours(self.expiration_hours))
            .unwrap_or_else(|| Duration::hours(DEFAULT_EXPIRATION_HOURS))
    }
}

fn clamp_expiration_hours(hours: i64) -> i64 {
    if !(1..=MAX_EXPIRATION_HOURS).contains(&hours) {
        warn!(
            "JWT_EXPIRATION_HOURS={}는 허용 범위(1~{})를 벗어났습니다",
            hours, MAX_EXPIRATION_HOURS
        );
    }
    hours.clamp(1, MAX_EXPIRATION_HOURS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiration_duration() {
        let config = JwtConfig {
            secret_key: "secret".to_string(),
            issuer: "issuer".to_string(),
            expiration_hours: 3,
        };

        assert_eq!(config.expiration(), Duration::hours(3));
    }

    #[test]
    fn test_out_of_range_expiration_is_clamped() {
        let config = |expiration_hours| JwtConfig {
            secret_key: "secret".to_string(),
            issuer: "issuer".to_string(),
            expiration_hours,
        };

        assert_eq!(config(i64::MAX).expiration(), Duration::hours(MAX_EXPIRATION_HOURS));
        assert_eq!(config(0).expiration(), Duration::hours(1));
        assert_eq!(config(-5).expiration(), Duration::hours(1));
    }
}
