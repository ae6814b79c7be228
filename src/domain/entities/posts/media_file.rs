use serde::{Deserialize, Serialize};

/// 오브젝트 스토리지에 저장된 게시글 첨부 파일
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaFile {
    /// 버킷 내 객체 키 (`{dir}/{uuid}_{원본 파일명}`)
    pub key: String,
    /// 공개 URL
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    pub original_name: String,
}
