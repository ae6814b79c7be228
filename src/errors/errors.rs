//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 서비스 계층의 실패를
//! 일관된 HTTP JSON 응답으로 변환합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::{AppError, AppResult};
//!
//! async fn find_member(repo: &dyn MemberRepository, id: &str) -> AppResult<Member> {
//!     repo.find_by_id(id)
//!         .await?
//!         .ok_or_else(|| AppError::NotFound("회원을 찾을 수 없습니다".to_string()))
//! }
//! ```

use std::collections::BTreeMap;

use actix_web::http::StatusCode;
use thiserror::Error;
use validator::ValidationErrors;

/// 애플리케이션 전역 에러 타입
///
/// 각 변형은 하나의 HTTP 상태 코드에 대응합니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 필드별 검증 에러 (400 Bad Request)
    ///
    /// 응답 본문의 `fields`에 `필드명 -> 메시지`가 담깁니다.
    #[error("Validation error: {} invalid field(s)", .0.len())]
    FieldValidation(BTreeMap<String, String>),

    /// 이미지가 아닌 파일 업로드 (400 Bad Request)
    #[error("{0}")]
    NotImageFile(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("{0}")]
    ConflictError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러 (403 Forbidden)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 오브젝트 스토리지 에러 (500 Internal Server Error)
    #[error("Storage error: {0}")]
    StorageError(String),

    /// 날씨 API 호출 실패 (502 Bad Gateway)
    #[error("Weather API error: {0}")]
    WeatherApiError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 이미지 업로드 검증 실패 에러
    pub fn not_image_file() -> Self {
        AppError::NotImageFile("Unsupported file type".to_string())
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_)
            | AppError::FieldValidation(_)
            | AppError::NotImageFile(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            AppError::WeatherApiError(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let body = match self {
            AppError::FieldValidation(fields) => serde_json::json!({
                "error": "Validation error",
                "fields": fields,
            }),
            _ => serde_json::json!({
                "error": self.to_string()
            }),
        };

        actix_web::HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<ValidationErrors> for AppError {
    /// 필드마다 첫 번째 메시지만 남깁니다. 메시지가 없으면 에러 코드를 사용합니다.
    fn from(errors: ValidationErrors) -> Self {
        let fields = errors
            .field_errors()
            .into_iter()
            .filter_map(|(field, errs)| {
                errs.first().map(|err| {
                    let message = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string());
                    (field.to_string(), message)
                })
            })
            .collect::<BTreeMap<_, _>>();

        AppError::FieldValidation(fields)
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::DatabaseError(e.to_string())
    }
}

impl From<actix_multipart::MultipartError> for AppError {
    fn from(e: actix_multipart::MultipartError) -> Self {
        AppError::ValidationError(format!("잘못된 multipart 요청입니다: {}", e))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 인증이 필요한 경로에 유효한 토큰 없이 접근했을 때의 401 응답
pub fn authentication_required_response() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Unauthorized().json(serde_json::json!({
        "error": "authentication_required",
        "message": "유효한 인증 토큰이 필요합니다"
    }))
}

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
