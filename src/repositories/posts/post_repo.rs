//! # 게시글 리포지토리
//!
//! `posts` 컬렉션에 대한 데이터 접근 계층입니다.
//!
//! 좋아요 증감은 문서 단위 원자적 연산으로 처리합니다.
//! - 좋아요: `liked_by`에 회원이 없을 때만 `$addToSet` + `$inc: 1`
//! - 취소: `liked_by`에 회원이 있고 `count_liked > 0`일 때만 `$pull` + `$inc: -1`
//! - 탈퇴: 회원이 누른 좋아요를 모든 게시글에서 같은 방식으로 취소

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::info;
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime, Document},
    options::{IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

use crate::db::Database;
use crate::domain::entities::posts::Post;
use crate::errors::{AppError, AppResult};

pub const POST_COLLECTION: &str = "posts";

/// 게시글 목록 조회 조건. 결과는 최신순입니다.
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    pub hashtag: Option<String>,
    pub member_id: Option<ObjectId>,
    pub skip: u64,
    pub limit: i64,
}

impl PostFilter {
    fn to_document(&self) -> Document {
        let mut filter = Document::new();
        if let Some(hashtag) = &self.hashtag {
            filter.insert("hashtags.name", hashtag.as_str());
        }
        if let Some(member_id) = self.member_id {
            filter.insert("member_id", member_id);
        }
        filter
    }
}

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create(&self, post: Post) -> AppResult<Post>;

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Post>>;

    async fn find_all(&self, filter: &PostFilter) -> AppResult<Vec<Post>>;

    async fn find_by_member(&self, member_id: &ObjectId) -> AppResult<Vec<Post>>;

    /// 본문, 위치, 기온, 수정 시각만 반영합니다. 좋아요 상태는 건드리지 않습니다.
    async fn update_details(&self, post: &Post) -> AppResult<Option<Post>>;

    async fn delete(&self, id: &ObjectId) -> AppResult<bool>;

    async fn delete_by_member(&self, member_id: &ObjectId) -> AppResult<u64>;

    /// 이미 좋아요한 회원이면 변화 없이 현재 게시글을 반환합니다.
    async fn add_like(&self, post_id: &ObjectId, member_id: &ObjectId) -> AppResult<Option<Post>>;

    /// 좋아요하지 않은 회원이면 변화 없이 현재 게시글을 반환합니다.
    async fn remove_like(&self, post_id: &ObjectId, member_id: &ObjectId) -> AppResult<Option<Post>>;

    /// 회원이 누른 좋아요를 모두 취소하고, 바뀐 게시글 수를 반환합니다.
    async fn remove_likes_by_member(&self, member_id: &ObjectId) -> AppResult<u64>;
}

pub struct MongoPostRepository {
    collection: Collection<Post>,
}

impl MongoPostRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<Post>(POST_COLLECTION),
        }
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        let member_index = IndexModel::builder()
            .keys(doc! { "member_id": 1, "created_at": -1 })
            .options(IndexOptions::builder()
                .name("member_created_at".to_string())
                .build())
            .build();

        let hashtag_index = IndexModel::builder()
            .keys(doc! { "hashtags.name": 1 })
            .options(IndexOptions::builder()
                .name("hashtag_name".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([created_at_index, member_index, hashtag_index])
            .await?;

        info!("✅ posts 인덱스 생성 완료");
        Ok(())
    }
}

#[async_trait]
impl PostRepository for MongoPostRepository {
    async fn create(&self, mut post: Post) -> AppResult<Post> {
        let result = self.collection.insert_one(&post).await?;
        post.id = result.inserted_id.as_object_id();
        Ok(post)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Post>> {
        Ok(self.collection.find_one(doc! { "_id": *id }).await?)
    }

    async fn find_all(&self, filter: &PostFilter) -> AppResult<Vec<Post>> {
        let cursor = self.collection
            .find(filter.to_document())
            .sort(doc! { "created_at": -1 })
            .skip(filter.skip)
            .limit(filter.limit)
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn find_by_member(&self, member_id: &ObjectId) -> AppResult<Vec<Post>> {
        let cursor = self.collection
            .find(doc! { "member_id": *member_id })
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn update_details(&self, post: &Post) -> AppResult<Option<Post>> {
        let id = post
            .id
            .ok_or_else(|| AppError::InternalError("저장되지 않은 게시글입니다".to_string()))?;

        let mut set = doc! {
            "content": post.content.as_str(),
            "updated_at": DateTime::now(),
        };
        let mut unset = Document::new();

        match &post.location {
            Some(location) => { set.insert("location", location.as_str()); }
            None => { unset.insert("location", ""); }
        }
        match post.temperature {
            Some(temperature) => { set.insert("temperature", f64::from(temperature)); }
            None => { unset.insert("temperature", ""); }
        }

        let mut update = doc! { "$set": set };
        if !unset.is_empty() {
            update.insert("$unset", unset);
        }

        Ok(self.collection
            .find_one_and_update(doc! { "_id": id }, update)
            .return_document(ReturnDocument::After)
            .await?)
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        let result = self.collection.delete_one(doc! { "_id": *id }).await?;
        Ok(result.deleted_count > 0)
    }

    async fn delete_by_member(&self, member_id: &ObjectId) -> AppResult<u64> {
        let result = self.collection
            .delete_many(doc! { "member_id": *member_id })
            .await?;
        Ok(result.deleted_count)
    }

    async fn add_like(&self, post_id: &ObjectId, member_id: &ObjectId) -> AppResult<Option<Post>> {
        let updated = self.collection
            .find_one_and_update(
                doc! { "_id": *post_id, "liked_by": { "$ne": *member_id } },
                doc! {
                    "$addToSet": { "liked_by": *member_id },
                    "$inc": { "count_liked": 1 },
                },
            )
            .return_document(ReturnDocument::After)
            .await?;

        match updated {
            Some(post) => Ok(Some(post)),
            None => self.find_by_id(post_id).await,
        }
    }

    async fn remove_like(&self, post_id: &ObjectId, member_id: &ObjectId) -> AppResult<Option<Post>> {
        let updated = self.collection
            .find_one_and_update(
                doc! {
                    "_id": *post_id,
                    "liked_by": *member_id,
                    "count_liked": { "$gt": 0 },
                },
                doc! {
                    "$pull": { "liked_by": *member_id },
                    "$inc": { "count_liked": -1 },
                },
            )
            .return_document(ReturnDocument::After)
            .await?;

        match updated {
            Some(post) => Ok(Some(post)),
            None => self.find_by_id(post_id).await,
        }
    }

    async fn remove_likes_by_member(&self, member_id: &ObjectId) -> AppResult<u64> {
        let counted = self.collection
            .update_many(
                doc! { "liked_by": *member_id, "count_liked": { "$gt": 0 } },
                doc! {
                    "$pull": { "liked_by": *member_id },
                    "$inc": { "count_liked": -1 },
                },
            )
            .await?;

        // count_liked가 이미 0인 문서에는 회원 ID만 남아 있을 수 있음
        self.collection
            .update_many(
                doc! { "liked_by": *member_id },
                doc! { "$pull": { "liked_by": *member_id } },
            )
            .await?;

        Ok(counted.modified_count)
    }
}
