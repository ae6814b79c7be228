//! # 문자열 유틸리티
//!
//! 요청 DTO에서 공통으로 쓰는 문자열 정리 함수들입니다.

use serde::Deserialize;

/// 앞뒤 공백을 제거하고, 남는 것이 없으면 `None`으로 바꿉니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// `#[serde(default, deserialize_with = "deserialize_optional_string")]`로 사용합니다.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}
