//! 공통 유틸리티 함수 모듈
//!
//! - [`string_utils`] - 요청 문자열 정리
//! - [`display_terminal`] - 서버 시작 배너 출력

pub mod display_terminal;
pub mod string_utils;
