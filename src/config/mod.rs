//! # Configuration Module
//!
//! 환경 변수 기반 설정값을 시작 시점에 한 번 읽어 타입이 있는 구조체로 만듭니다.
//! 만들어진 설정은 생성자를 통해 필요한 컴포넌트에 전달됩니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 데이터베이스, 패스워드, Rate Limiting
//! - [`auth_config`] - JWT 서명 키, 발급자, 만료 시간
//! - [`external_config`] - S3 오브젝트 스토리지, 날씨 API
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::AppConfig;
//!
//! let config = AppConfig::from_env();
//! let bind = config.server.bind_address();
//! ```

pub mod auth_config;
pub mod data_config;
pub mod external_config;

use std::env;
use std::str::FromStr;

use log::error;

pub use auth_config::JwtConfig;
pub use data_config::{
    DatabaseConfig, Environment, PasswordConfig, RateLimitConfig, ServerConfig,
};
pub use external_config::{S3Config, WeatherConfig};

/// 애플리케이션 전체 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub password: PasswordConfig,
    pub s3: S3Config,
    pub weather: WeatherConfig,
    pub rate_limit: RateLimitConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = Environment::current();
        let password = PasswordConfig::from_env(&environment);

        Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            jwt: JwtConfig::from_env(),
            password,
            s3: S3Config::from_env(),
            weather: WeatherConfig::from_env(),
            rate_limit: RateLimitConfig::from_env(),
            environment,
        }
    }
}

/// 환경 변수를 파싱하고, 없거나 잘못된 값이면 기본값을 사용합니다.
pub(crate) fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().unwrap_or_else(|e| {
            error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_or_falls_back_on_missing_key() {
        let value: u16 = env_or("SOCIAL_POST_TEST_MISSING_KEY", 42);
        assert_eq!(value, 42);
    }
}
