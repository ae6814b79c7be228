//! # 애플리케이션 상태 조립
//!
//! 시작 시점에 저장소, 외부 연동 객체, 서비스를 한 번 만들고
//! `web::Data`로 감싸 모든 워커가 공유합니다.
//!
//! ```text
//! AppConfig ──┬─▶ MongoMemberRepository ─┐
//!             ├─▶ MongoPostRepository ───┼─▶ MemberService
//!             ├─▶ S3ObjectStorage ─▶ S3Uploader ─┤
//!             ├─▶ OpenWeatherClient ─────┼─▶ PostService
//!             └─▶ TokenProvider ─────────┘
//! ```

use std::sync::Arc;

use actix_web::web;
use log::{info, warn};

use crate::config::AppConfig;
use crate::db::Database;
use crate::errors::AppResult;
use crate::repositories::members::{MemberRepository, MongoMemberRepository};
use crate::repositories::posts::{MongoPostRepository, PostRepository};
use crate::services::auth::TokenProvider;
use crate::services::members::MemberService;
use crate::services::posts::PostService;
use crate::services::storage::{ObjectStorage, S3ObjectStorage, S3Uploader};
use crate::services::weather::{OpenWeatherClient, WeatherProvider};

/// 핸들러가 `web::Data`로 꺼내 쓰는 공유 객체 묶음
#[derive(Clone)]
pub struct AppState {
    pub token_provider: web::Data<TokenProvider>,
    pub member_service: web::Data<MemberService>,
    pub post_service: web::Data<PostService>,
}

impl AppState {
    /// MongoDB, S3, 날씨 API에 연결된 운영용 상태를 만듭니다.
    pub async fn connect(config: &AppConfig, database: &Database) -> AppResult<Self> {
        let member_repo = MongoMemberRepository::new(database);
        member_repo.create_indexes().await?;

        let post_repo = MongoPostRepository::new(database);
        post_repo.create_indexes().await?;

        let storage = S3ObjectStorage::from_config(&config.s3).await;
        let weather = OpenWeatherClient::new(&config.weather)?;
        if !weather.is_enabled() {
            warn!("WEATHER_API_KEY가 없어 기온 조회를 건너뜁니다");
        }

        Ok(Self::new(
            config,
            Arc::new(member_repo),
            Arc::new(post_repo),
            Arc::new(storage),
            Arc::new(weather),
        ))
    }

    pub fn new(
        config: &AppConfig,
        member_repo: Arc<dyn MemberRepository>,
        post_repo: Arc<dyn PostRepository>,
        storage: Arc<dyn ObjectStorage>,
        weather: Arc<dyn WeatherProvider>,
    ) -> Self {
        let token_provider = Arc::new(TokenProvider::new(&config.jwt));
        let uploader = Arc::new(S3Uploader::new(storage, config.s3.clone()));

        let member_service = MemberService::new(
            member_repo.clone(),
            post_repo.clone(),
            token_provider.clone(),
            uploader.clone(),
            config.password.bcrypt_cost,
        );
        let post_service = PostService::new(post_repo, member_repo, uploader, weather);

        info!("✅ 서비스 초기화 완료");

        Self {
            token_provider: web::Data::from(token_provider),
            member_service: web::Data::new(member_service),
            post_service: web::Data::new(post_service),
        }
    }

    /// `App::configure`에 넘겨 공유 객체를 등록합니다.
    pub fn register(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.token_provider.clone())
            .app_data(self.member_service.clone())
            .app_data(self.post_service.clone());
    }
}

#[cfg(test)]
impl AppState {
    /// 메모리 저장소와 고정 날씨 값으로 구성한 테스트용 상태
    pub(crate) fn in_memory(temperature: Option<f32>) -> Self {
        use crate::config::{
            DatabaseConfig, Environment, JwtConfig, PasswordConfig, RateLimitConfig, S3Config,
            ServerConfig, WeatherConfig,
        };
        use crate::repositories::memory::{InMemoryMemberRepository, InMemoryPostRepository};
        use crate::services::storage::memory::InMemoryObjectStorage;
        use crate::services::weather::fixed::FixedWeather;

        let config = AppConfig {
            environment: Environment::Test,
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                workers: 1,
            },
            database: DatabaseConfig {
                uri: "mongodb://localhost:27017".to_string(),
                database_name: "social_post_test".to_string(),
            },
            jwt: JwtConfig {
                secret_key: "test-secret".to_string(),
                issuer: "test-issuer".to_string(),
                expiration_hours: 1,
            },
            password: PasswordConfig { bcrypt_cost: 4 },
            s3: S3Config {
                bucket: "bucket".to_string(),
                region: "ap-northeast-2".to_string(),
                endpoint: None,
                public_base_url: Some("https://cdn.example.com".to_string()),
                upload_dir: "posts".to_string(),
                profile_dir: "profiles".to_string(),
                access_key_id: None,
                secret_access_key: None,
            },
            weather: WeatherConfig {
                api_key: None,
                api_url: "http://127.0.0.1:9/weather".to_string(),
                timeout_secs: 1,
            },
            rate_limit: RateLimitConfig {
                per_second: 100,
                burst_size: 200,
            },
        };

        Self::new(
            &config,
            Arc::new(InMemoryMemberRepository::default()),
            Arc::new(InMemoryPostRepository::default()),
            Arc::new(InMemoryObjectStorage::default()),
            Arc::new(FixedWeather(temperature)),
        )
    }
}
