//! 소셜 포스트 서비스 백엔드
//!
//! 회원 가입과 JWT 로그인, 사진과 해시태그가 달린 게시글, 좋아요,
//! 작성 위치의 기온 기록을 제공하는 REST API 서버입니다.
//!
//! # Features
//!
//! - **회원 관리**: 가입, 로그인, 프로필 및 프로필 이미지 변경, 탈퇴
//! - **JWT 인증**: HS256 액세스 토큰 기반 상태 없는 인증
//! - **게시글**: 사진 업로드(S3), 해시태그, 좋아요, 위치별 기온
//! - **MongoDB**: 회원/게시글 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + 인증 미들웨어
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← JSON / multipart 요청 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직, S3 업로드, 날씨 조회
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  MongoDB + S3   │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use social_post_backend::config::AppConfig;
//! use social_post_backend::core::AppState;
//! use social_post_backend::db::Database;
//!
//! let config = AppConfig::from_env();
//! let database = Database::new(&config.database).await?;
//! let state = AppState::connect(&config, &database).await?;
//! ```

pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
