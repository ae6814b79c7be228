//! Post Entity Implementation
//!
//! 게시글 엔티티입니다. 첨부 파일과 해시태그는 문서 안에 포함되며,
//! 상태 변경은 아래의 명시적인 메서드로만 수행합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use super::{Hashtag, MediaFile};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 작성자
    pub member_id: ObjectId,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// 작성 시점의 기온 (섭씨)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(default)]
    pub media_files: Vec<MediaFile>,
    #[serde(default)]
    pub hashtags: Vec<Hashtag>,
    pub count_liked: i32,
    /// 좋아요를 누른 회원 목록
    #[serde(default)]
    pub liked_by: Vec<ObjectId>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Post {
    pub fn new(
        member_id: ObjectId,
        content: String,
        location: Option<String>,
        temperature: Option<f32>,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            member_id,
            content,
            location,
            temperature,
            media_files: Vec::new(),
            hashtags: Vec::new(),
            count_liked: 0,
            liked_by: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    pub fn is_owned_by(&self, member_id: &ObjectId) -> bool {
        &self.member_id == member_id
    }

    /// 본문, 위치, 기온을 교체합니다. 첨부 파일과 해시태그는 건드리지 않습니다.
    pub fn update(&mut self, content: String, location: Option<String>, temperature: Option<f32>) {
        self.content = content;
        self.location = location;
        self.temperature = temperature;
        self.updated_at = DateTime::now();
    }

    pub fn add_media_file(&mut self, media_file: MediaFile) {
        self.media_files.push(media_file);
    }

    pub fn create_hashtags<I, S>(&mut self, raw: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.hashtags = Hashtag::parse_all(raw);
    }

    pub fn increase_count_liked(&mut self) {
        self.count_liked += 1;
    }

    /// 0 아래로 내려가지 않습니다.
    pub fn decrease_count_liked(&mut self) {
        self.count_liked = (self.count_liked - 1).max(0);
    }

    /// 이미 좋아요를 누른 회원이면 `false`를 반환하고 아무것도 바꾸지 않습니다.
    pub fn like(&mut self, member_id: ObjectId) -> bool {
        if self.liked_by.contains(&member_id) {
            return false;
        }
        self.liked_by.push(member_id);
        self.increase_count_liked();
        true
    }

    pub fn unlike(&mut self, member_id: &ObjectId) -> bool {
        let before = self.liked_by.len();
        self.liked_by.retain(|id| id != member_id);
        if self.liked_by.len() == before {
            return false;
        }
        self.decrease_count_liked();
        true
    }

    pub fn hashtag_names(&self) -> Vec<String> {
        self.hashtags.iter().map(|tag| tag.name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post() -> Post {
        Post::new(ObjectId::new(), "오늘 날씨 좋다".to_string(), Some("Seoul".to_string()), None)
    }

    #[test]
    fn test_decrease_never_goes_negative() {
        let mut post = post();
        post.decrease_count_liked();
        post.decrease_count_liked();
        assert_eq!(post.count_liked, 0);

        post.increase_count_liked();
        post.decrease_count_liked();
        assert_eq!(post.count_liked, 0);
    }

    #[test]
    fn test_like_is_once_per_member() {
        let mut post = post();
        let member = ObjectId::new();

        assert!(post.like(member));
        assert!(!post.like(member));
        assert_eq!(post.count_liked, 1);

        assert!(post.unlike(&member));
        assert!(!post.unlike(&member));
        assert_eq!(post.count_liked, 0);
    }

    #[test]
    fn test_update_keeps_media_and_hashtags() {
        let mut post = post();
        post.create_hashtags(["#daily"]);
        post.add_media_file(MediaFile {
            key: "posts/k_a.png".to_string(),
            url: "https://cdn/posts/k_a.png".to_string(),
            content_type: Some("image/png".to_string()),
            original_name: "a.png".to_string(),
        });

        post.update("수정됨".to_string(), None, Some(21.5));

        assert_eq!(post.content, "수정됨");
        assert_eq!(post.location, None);
        assert_eq!(post.temperature, Some(21.5));
        assert_eq!(post.hashtag_names(), vec!["daily".to_string()]);
        assert_eq!(post.media_files.len(), 1);
    }

    #[test]
    fn test_ownership() {
        let post = post();
        assert!(post.is_owned_by(&post.member_id.clone()));
        assert!(!post.is_owned_by(&ObjectId::new()));
    }
}
