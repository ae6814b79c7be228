use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domain::dto::members::response::rfc3339;
use crate::domain::entities::posts::{MediaFile, Post};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub member_id: String,
    pub content: String,
    pub location: Option<String>,
    pub temperature: Option<f32>,
    pub media_files: Vec<MediaFile>,
    pub hashtags: Vec<String>,
    pub count_liked: i32,
    /// 요청한 회원이 좋아요를 눌렀는지 여부 (비로그인 시 false)
    pub liked: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl PostResponse {
    pub fn for_viewer(post: Post, viewer: Option<&ObjectId>) -> Self {
        let liked = viewer.is_some_and(|id| post.liked_by.contains(id));
        let hashtags = post.hashtag_names();

        Self {
            id: post.id_string().unwrap_or_default(),
            member_id: post.member_id.to_hex(),
            content: post.content,
            location: post.location,
            temperature: post.temperature,
            media_files: post.media_files,
            hashtags,
            count_liked: post.count_liked,
            liked,
            created_at: rfc3339(post.created_at),
            updated_at: rfc3339(post.updated_at),
        }
    }
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self::for_viewer(post, None)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostListResponse {
    pub posts: Vec<PostResponse>,
    pub page: u64,
    pub size: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_liked_flag_follows_viewer() {
        let liker = ObjectId::new();
        let mut post = Post::new(ObjectId::new(), "내용".to_string(), None, None);
        post.like(liker);

        assert!(PostResponse::for_viewer(post.clone(), Some(&liker)).liked);
        assert!(!PostResponse::for_viewer(post.clone(), Some(&ObjectId::new())).liked);

        let anonymous = PostResponse::from(post);
        assert!(!anonymous.liked);
        assert_eq!(anonymous.count_liked, 1);
    }
}
