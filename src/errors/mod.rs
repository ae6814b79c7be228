//! 에러 타입 모듈

pub mod errors;

pub use errors::{authentication_required_response, AppError, AppResult, ErrorContext};
