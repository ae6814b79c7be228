//! # Core Module
//!
//! 애플리케이션 구성 요소를 조립하는 [`AppState`]를 제공합니다.

pub mod app_state;

pub use app_state::AppState;
