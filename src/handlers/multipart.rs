//! multipart/form-data 요청 본문 읽기
//!
//! 게시글 작성은 `post` 파트(JSON)와 `files` 파트(0개 이상)로,
//! 프로필 이미지 변경은 `image` 파트 하나로 구성됩니다.

use actix_multipart::{Field, Multipart};
use futures_util::StreamExt;
use log::debug;
use serde::de::DeserializeOwned;

use crate::domain::models::upload::UploadedFile;
use crate::errors::{AppError, AppResult};

/// 요청 하나에서 받을 수 있는 최대 본문 크기
pub const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

const JSON_PART: &str = "post";
const FILE_PARTS: [&str; 3] = ["files", "file", "image"];

/// 파트 이름별로 나눈 multipart 본문
#[derive(Debug, Default)]
pub struct MultipartParts {
    pub json: Option<Vec<u8>>,
    pub files: Vec<UploadedFile>,
}

impl MultipartParts {
    /// `post` 파트를 역직렬화합니다. 없거나 형식이 잘못되면 400.
    pub fn parse_json<T: DeserializeOwned>(&self) -> AppResult<T> {
        let raw = self
            .json
            .as_deref()
            .ok_or_else(|| AppError::ValidationError(format!("'{}' 파트가 필요합니다", JSON_PART)))?;

        serde_json::from_slice(raw)
            .map_err(|e| AppError::ValidationError(format!("'{}' 파트 JSON 형식 오류: {}", JSON_PART, e)))
    }

    /// 첫 번째 파일 파트. 없으면 400.
    pub fn into_single_file(self) -> AppResult<UploadedFile> {
        self.files
            .into_iter()
            .next()
            .ok_or_else(|| AppError::ValidationError("업로드할 파일이 없습니다".to_string()))
    }
}

pub async fn read_multipart(mut payload: Multipart) -> AppResult<MultipartParts> {
    let mut parts = MultipartParts::default();
    let mut total_bytes = 0usize;

    while let Some(item) = payload.next().await {
        let mut field = item?;
        let name = field.name().unwrap_or_default().to_string();

        if name == JSON_PART {
            parts.json = Some(read_field(&mut field, &mut total_bytes).await?);
        } else if FILE_PARTS.contains(&name.as_str()) {
            let original_name = field
                .content_disposition()
                .and_then(|cd| cd.get_filename())
                .unwrap_or_default()
                .to_string();
            let content_type = field.content_type().map(|mime| mime.essence_str().to_string());

            let bytes = read_field(&mut field, &mut total_bytes).await?;
            if bytes.is_empty() && original_name.is_empty() {
                debug!("빈 파일 파트 건너뜀: {}", name);
                continue;
            }
            parts.files.push(UploadedFile::new(original_name, content_type, bytes));
        } else {
            debug!("알 수 없는 multipart 파트 무시: {}", name);
            read_field(&mut field, &mut total_bytes).await?;
        }
    }

    Ok(parts)
}

async fn read_field(field: &mut Field, total_bytes: &mut usize) -> AppResult<Vec<u8>> {
    let mut bytes = Vec::new();

    while let Some(chunk) = field.next().await {
        let chunk = chunk?;
        *total_bytes += chunk.len();
        if *total_bytes > MAX_UPLOAD_BYTES {
            return Err(AppError::ValidationError(format!(
                "업로드 용량은 {}MB를 넘을 수 없습니다",
                MAX_UPLOAD_BYTES / 1024 / 1024
            )));
        }
        bytes.extend_from_slice(&chunk);
    }

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::posts::PostRequest;

    #[test]
    fn test_parse_json_part() {
        let parts = MultipartParts {
            json: Some(br##"{"content":"hello","hashtags":["#a"]}"##.to_vec()),
            files: Vec::new(),
        };

        let request: PostRequest = parts.parse_json().unwrap();
        assert_eq!(request.content, "hello");
        assert_eq!(request.hashtags, vec!["#a"]);
    }

    #[test]
    fn test_missing_json_part() {
        let parts = MultipartParts::default();

        assert!(matches!(
            parts.parse_json::<PostRequest>(),
            Err(AppError::ValidationError(_))
        ));
        assert!(parts.into_single_file().is_err());
    }
}
