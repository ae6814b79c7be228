//! 게시글 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::string_utils::deserialize_optional_string;

pub const DEFAULT_PAGE_SIZE: u64 = 20;
pub const MAX_PAGE_SIZE: u64 = 100;

/// 게시글 작성 요청
///
/// multipart 요청의 `post` 파트에 JSON으로 담겨 옵니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct PostRequest {
    #[validate(length(min = 1, max = 2000, message = "게시글 내용은 1-2000자 사이여야 합니다"))]
    pub content: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 100, message = "위치는 100자 이하여야 합니다"))]
    pub location: Option<String>,

    /// 비워 두고 위치를 보내면 날씨 API에서 기온을 채웁니다.
    #[validate(range(min = -90.0, max = 60.0, message = "기온 값이 올바르지 않습니다"))]
    pub temperature: Option<f32>,

    #[serde(default)]
    pub hashtags: Vec<String>,
}

/// 게시글 수정 요청. 본문, 위치, 기온만 바꿀 수 있습니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct PostUpdateRequest {
    #[validate(length(min = 1, max = 2000, message = "게시글 내용은 1-2000자 사이여야 합니다"))]
    pub content: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 100, message = "위치는 100자 이하여야 합니다"))]
    pub location: Option<String>,

    #[validate(range(min = -90.0, max = 60.0, message = "기온 값이 올바르지 않습니다"))]
    pub temperature: Option<f32>,
}

/// 게시글 목록 조회 쿼리
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostListQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub hashtag: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub member_id: Option<String>,
    pub page: Option<u64>,
    pub size: Option<u64>,
}

impl PostListQuery {
    /// 0부터 시작하는 페이지 번호
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(0)
    }

    pub fn size(&self) -> u64 {
        self.size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
    }
}
