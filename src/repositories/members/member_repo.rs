//! # 회원 리포지토리
//!
//! `members` 컬렉션에 대한 데이터 접근 계층입니다.
//! 서비스는 [`MemberRepository`] trait에만 의존하고, 운영 환경에서는
//! [`MongoMemberRepository`]가 주입됩니다.
//!
//! 이메일 중복은 유니크 인덱스(`email_unique`)로 보장되며,
//! 중복 키 쓰기 오류는 `AppError::ConflictError`로 변환됩니다.

use async_trait::async_trait;
use log::info;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::db::Database;
use crate::domain::entities::members::Member;
use crate::errors::{AppError, AppResult};
use crate::repositories::is_duplicate_key_error;

pub const MEMBER_COLLECTION: &str = "members";

pub const DUPLICATE_EMAIL_MESSAGE: &str = "Email already exists";

#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// 새 회원을 저장하고 ID가 채워진 엔티티를 반환합니다.
    async fn create(&self, member: Member) -> AppResult<Member>;

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Member>>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Member>>;

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        Ok(self.find_by_email(email).await?.is_some())
    }

    /// 문서 전체를 교체합니다. 없는 회원이면 `NotFound`.
    async fn update(&self, member: &Member) -> AppResult<()>;

    async fn delete(&self, id: &ObjectId) -> AppResult<bool>;
}

/// 이메일 유니크 인덱스 위반은 409로, 나머지는 DB 에러로 바꿉니다.
fn insert_error(error: mongodb::error::Error) -> AppError {
    if is_duplicate_key_error(&error) {
        AppError::ConflictError(DUPLICATE_EMAIL_MESSAGE.to_string())
    } else {
        AppError::DatabaseError(error.to_string())
    }
}

pub struct MongoMemberRepository {
    collection: Collection<Member>,
}

impl MongoMemberRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<Member>(MEMBER_COLLECTION),
        }
    }

    /// 이메일 유니크 인덱스와 생성일 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([email_index, created_at_index])
            .await?;

        info!("✅ members 인덱스 생성 완료");
        Ok(())
    }
}

#[async_trait]
impl MemberRepository for MongoMemberRepository {
    async fn create(&self, mut member: Member) -> AppResult<Member> {
        let result = self.collection
            .insert_one(&member)
            .await
            .map_err(insert_error)?;

        member.id = result.inserted_id.as_object_id();
        Ok(member)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Member>> {
        Ok(self.collection.find_one(doc! { "_id": *id }).await?)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Member>> {
        Ok(self.collection.find_one(doc! { "email": email }).await?)
    }

    async fn update(&self, member: &Member) -> AppResult<()> {
        let id = member
            .id
            .ok_or_else(|| AppError::InternalError("저장되지 않은 회원입니다".to_string()))?;

        let result = self.collection
            .replace_one(doc! { "_id": id }, member)
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound("회원을 찾을 수 없습니다".to_string()));
        }
        Ok(())
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        let result = self.collection.delete_one(doc! { "_id": *id }).await?;
        Ok(result.deleted_count > 0)
    }
}
