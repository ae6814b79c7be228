use serde::{Deserialize, Serialize};

/// 게시글에 연결된 해시태그
///
/// 게시글 문서 안에 포함되어 저장되므로 게시글이 삭제되면 함께 사라집니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hashtag {
    pub name: String,
}

impl Hashtag {
    /// 앞뒤 공백과 선행 `#`을 제거하고 소문자로 맞춥니다. 비어 있으면 `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let name = raw.trim().trim_start_matches('#').trim().to_lowercase();
        if name.is_empty() {
            None
        } else {
            Some(Self { name })
        }
    }

    /// 입력 순서를 유지하면서 중복과 빈 값을 제거합니다.
    pub fn parse_all<I, S>(raw: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tags: Vec<Self> = Vec::new();
        for tag in raw.into_iter().filter_map(|s| Self::parse(s.as_ref())) {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        tags
    }
}
