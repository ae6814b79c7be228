//! 소셜 포스트 서비스 메인 애플리케이션
//!
//! 설정을 읽고 MongoDB, S3, 날씨 API 클라이언트를 준비한 뒤
//! Actix-web HTTP 서버를 구동합니다.

use std::io;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use social_post_backend::config::AppConfig;
use social_post_backend::core::AppState;
use social_post_backend::db::Database;
use social_post_backend::routes::configure_all_routes;
use social_post_backend::utils::display_terminal::{
    print_boxed_title, print_startup_summary, print_step_complete, print_step_start,
    print_sub_task,
};

#[actix_web::main]
async fn main() -> io::Result<()> {
    load_env_file();
    init_logging();

    print_boxed_title("📸 SOCIAL POST BACKEND");

    print_step_start(1, "설정 로드");
    let config = AppConfig::from_env();
    print_sub_task("Environment", &format!("{:?}", config.environment));
    print_sub_task("Database", &config.database.database_name);
    print_sub_task("S3 bucket", &config.s3.bucket);
    print_sub_task(
        "Weather API",
        if config.weather.api_key.is_some() { "enabled" } else { "disabled" },
    );
    print_step_complete(1, "설정 로드");

    print_step_start(2, "MongoDB 연결");
    let database = Database::new(&config.database).await.map_err(|e| {
        error!("데이터베이스 연결 실패: {}", e);
        io::Error::new(io::ErrorKind::Other, e.to_string())
    })?;
    print_step_complete(2, "MongoDB 연결");

    print_step_start(3, "서비스 초기화");
    let state = AppState::connect(&config, &database).await.map_err(|e| {
        error!("서비스 초기화 실패: {}", e);
        io::Error::new(io::ErrorKind::Other, e.to_string())
    })?;
    print_step_complete(3, "서비스 초기화");

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(config, state).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 요청 로깅, 경로 정규화 미들웨어를 적용합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(config: AppConfig, state: AppState) -> io::Result<()> {
    let bind_address = config.server.bind_address();
    let workers = config.server.workers;

    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(config.rate_limit.per_second)
        .burst_size(config.rate_limit.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "잘못된 Rate Limiting 설정"))?;
    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        config.rate_limit.per_second, config.rate_limit.burst_size
    );

    let server = HttpServer::new(move || {
        let state = state.clone();

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(|cfg| state.register(cfg))
            .configure(configure_all_routes)
    })
    .bind(&bind_address)?
    .workers(workers);

    print_startup_summary(&bind_address, workers);

    server.run().await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    // 로거 초기화 전이므로 표준 출력 사용
    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    match loaded {
        Ok(file) => println!("Current profile: {} ({} 로드 됨)", profile, file),
        Err(e) => eprintln!("Current profile: {} (설정 파일 로드 실패: {})", profile, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// ```bash
/// # 서비스 계층만 debug
/// RUST_LOG=social_post_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// 프론트엔드 개발 서버와의 통신을 위한 CORS 설정
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}
