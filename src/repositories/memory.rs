//! 테스트용 메모리 저장소
//!
//! MongoDB 구현과 같은 규칙(이메일 유일성, 최신순 정렬, 좋아요 1회)을 따릅니다.

use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};

use crate::domain::entities::members::Member;
use crate::domain::entities::posts::Post;
use crate::errors::{AppError, AppResult};
use crate::repositories::members::member_repo::{MemberRepository, DUPLICATE_EMAIL_MESSAGE};
use crate::repositories::posts::{PostFilter, PostRepository};

#[derive(Default)]
pub struct InMemoryMemberRepository {
    members: Mutex<Vec<Member>>,
}

impl InMemoryMemberRepository {
    pub fn count(&self) -> usize {
        self.members.lock().unwrap().len()
    }
}

#[async_trait]
impl MemberRepository for InMemoryMemberRepository {
    async fn create(&self, mut member: Member) -> AppResult<Member> {
        let mut members = self.members.lock().unwrap();
        if members.iter().any(|m| m.email == member.email) {
            return Err(AppError::ConflictError(DUPLICATE_EMAIL_MESSAGE.to_string()));
        }
        member.id = Some(ObjectId::new());
        members.push(member.clone());
        Ok(member)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Member>> {
        let members = self.members.lock().unwrap();
        Ok(members.iter().find(|m| m.id.as_ref() == Some(id)).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Member>> {
        let members = self.members.lock().unwrap();
        Ok(members.iter().find(|m| m.email == email).cloned())
    }

    async fn update(&self, member: &Member) -> AppResult<()> {
        let mut members = self.members.lock().unwrap();
        let slot = members
            .iter_mut()
            .find(|m| m.id.is_some() && m.id == member.id)
            .ok_or_else(|| AppError::NotFound("회원을 찾을 수 없습니다".to_string()))?;
        *slot = member.clone();
        Ok(())
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        let mut members = self.members.lock().unwrap();
        let before = members.len();
        members.retain(|m| m.id.as_ref() != Some(id));
        Ok(members.len() != before)
    }
}

#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: Mutex<Vec<Post>>,
    fail_writes: bool,
}

impl InMemoryPostRepository {
    /// `create`와 `delete_by_member`가 항상 DB 에러를 내는 저장소
    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Default::default()
        }
    }

    pub fn count(&self) -> usize {
        self.posts.lock().unwrap().len()
    }

    fn check_write(&self) -> AppResult<()> {
        if self.fail_writes {
            return Err(AppError::DatabaseError("write failed".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, mut post: Post) -> AppResult<Post> {
        self.check_write()?;
        post.id = Some(ObjectId::new());
        self.posts.lock().unwrap().push(post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Post>> {
        let posts = self.posts.lock().unwrap();
        Ok(posts.iter().find(|p| p.id.as_ref() == Some(id)).cloned())
    }

    async fn find_all(&self, filter: &PostFilter) -> AppResult<Vec<Post>> {
        let posts = self.posts.lock().unwrap();
        let mut matched: Vec<Post> = posts
            .iter()
            .filter(|p| {
                filter
                    .hashtag
                    .as_ref()
                    .is_none_or(|tag| p.hashtags.iter().any(|h| &h.name == tag))
            })
            .filter(|p| filter.member_id.is_none_or(|id| p.member_id == id))
            .cloned()
            .collect();

        // 같은 시각이면 나중에 넣은 것이 먼저
        matched.reverse();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(matched
            .into_iter()
            .skip(filter.skip as usize)
            .take(filter.limit.max(0) as usize)
            .collect())
    }

    async fn find_by_member(&self, member_id: &ObjectId) -> AppResult<Vec<Post>> {
        let posts = self.posts.lock().unwrap();
        Ok(posts.iter().filter(|p| &p.member_id == member_id).cloned().collect())
    }

    async fn update_details(&self, post: &Post) -> AppResult<Option<Post>> {
        let mut posts = self.posts.lock().unwrap();
        let Some(stored) = posts.iter_mut().find(|p| p.id.is_some() && p.id == post.id) else {
            return Ok(None);
        };
        stored.content = post.content.clone();
        stored.location = post.location.clone();
        stored.temperature = post.temperature;
        stored.updated_at = DateTime::now();
        Ok(Some(stored.clone()))
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|p| p.id.as_ref() != Some(id));
        Ok(posts.len() != before)
    }

    async fn delete_by_member(&self, member_id: &ObjectId) -> AppResult<u64> {
        self.check_write()?;
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|p| &p.member_id != member_id);
        Ok((before - posts.len()) as u64)
    }

    async fn add_like(&self, post_id: &ObjectId, member_id: &ObjectId) -> AppResult<Option<Post>> {
        let mut posts = self.posts.lock().unwrap();
        Ok(posts
            .iter_mut()
            .find(|p| p.id.as_ref() == Some(post_id))
            .map(|post| {
                post.like(*member_id);
                post.clone()
            }))
    }

    async fn remove_like(&self, post_id: &ObjectId, member_id: &ObjectId) -> AppResult<Option<Post>> {
        let mut posts = self.posts.lock().unwrap();
        Ok(posts
            .iter_mut()
            .find(|p| p.id.as_ref() == Some(post_id))
            .map(|post| {
                post.unlike(member_id);
                post.clone()
            }))
    }

    async fn remove_likes_by_member(&self, member_id: &ObjectId) -> AppResult<u64> {
        let mut posts = self.posts.lock().unwrap();
        Ok(posts
            .iter_mut()
            .map(|post| post.unlike(member_id))
            .filter(|changed| *changed)
            .count() as u64)
    }
}
