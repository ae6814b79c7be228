//! # 게시글 서비스
//!
//! 게시글 작성, 조회, 수정, 삭제와 좋아요를 담당합니다.
//!
//! - 작성: 본문 검증 → 작성자 확인 → 기온 보완 → 해시태그 정리 → 첨부 파일 업로드 → 저장
//! - 수정/삭제: 작성자 본인만 가능 (`403 Forbidden`)
//! - 좋아요: 가입된 회원당 한 번, 취소해도 0 아래로 내려가지 않음

use std::sync::Arc;

use log::{info, warn};
use mongodb::bson::oid::ObjectId;
use validator::Validate;

use crate::domain::dto::posts::{
    PostListQuery, PostListResponse, PostRequest, PostResponse, PostUpdateRequest,
};
use crate::domain::entities::posts::{Hashtag, MediaFile, Post};
use crate::domain::models::upload::UploadedFile;
use crate::errors::{AppError, AppResult};
use crate::repositories::members::MemberRepository;
use crate::repositories::posts::{PostFilter, PostRepository};
use crate::services::members::member_service::MEMBER_NOT_FOUND_MESSAGE;
use crate::services::storage::S3Uploader;
use crate::services::weather::WeatherProvider;

const POST_NOT_FOUND_MESSAGE: &str = "게시글을 찾을 수 없습니다";

pub struct PostService {
    post_repo: Arc<dyn PostRepository>,
    member_repo: Arc<dyn MemberRepository>,
    uploader: Arc<S3Uploader>,
    weather: Arc<dyn WeatherProvider>,
}

impl PostService {
    pub fn new(
        post_repo: Arc<dyn PostRepository>,
        member_repo: Arc<dyn MemberRepository>,
        uploader: Arc<S3Uploader>,
        weather: Arc<dyn WeatherProvider>,
    ) -> Self {
        Self {
            post_repo,
            member_repo,
            uploader,
            weather,
        }
    }

    /// 게시글 작성
    ///
    /// 기온을 보내지 않고 위치만 보낸 경우 날씨 API로 현재 기온을 채웁니다.
    /// 첨부 파일 업로드는 일부가 실패해도 나머지로 게시글을 만듭니다.
    pub async fn create_post(
        &self,
        member_id: &ObjectId,
        request: PostRequest,
        files: Vec<UploadedFile>,
    ) -> AppResult<PostResponse> {
        request.validate()?;
        self.ensure_member_exists(member_id).await?;

        let temperature = match (request.temperature, request.location.as_deref()) {
            (Some(temperature), _) => Some(temperature),
            (None, Some(location)) => self.weather.current_temperature(location).await?,
            (None, None) => None,
        };

        let mut post = Post::new(*member_id, request.content, request.location, temperature);
        post.create_hashtags(&request.hashtags);

        for media_file in self.uploader.upload_all(files).await {
            post.add_media_file(media_file);
        }

        let uploaded = post.media_files.clone();
        let created = match self.post_repo.create(post).await {
            Ok(created) => created,
            Err(e) => {
                self.remove_media_files(&uploaded).await;
                return Err(e);
            }
        };
        info!(
            "📝 게시글 작성: {} (첨부 {}개, 해시태그 {}개)",
            created.id_string().unwrap_or_default(),
            created.media_files.len(),
            created.hashtags.len()
        );

        Ok(PostResponse::for_viewer(created, Some(member_id)))
    }

    pub async fn get_post(&self, post_id: &str, viewer: Option<&ObjectId>) -> AppResult<PostResponse> {
        let post = self.find_post(post_id).await?;
        Ok(PostResponse::for_viewer(post, viewer))
    }

    /// 최신순 목록. 해시태그와 작성자로 거를 수 있습니다.
    pub async fn list_posts(
        &self,
        query: &PostListQuery,
        viewer: Option<&ObjectId>,
    ) -> AppResult<PostListResponse> {
        let member_id = query
            .member_id
            .as_deref()
            .map(|raw| {
                ObjectId::parse_str(raw)
                    .map_err(|_| AppError::ValidationError("member_id 형식이 올바르지 않습니다".to_string()))
            })
            .transpose()?;

        let page = query.page();
        let size = query.size();
        let filter = PostFilter {
            hashtag: query
                .hashtag
                .as_deref()
                .and_then(Hashtag::parse)
                .map(|tag| tag.name),
            member_id,
            skip: page.saturating_mul(size),
            limit: size as i64,
        };

        let posts = self
            .post_repo
            .find_all(&filter)
            .await?
            .into_iter()
            .map(|post| PostResponse::for_viewer(post, viewer))
            .collect();

        Ok(PostListResponse { posts, page, size })
    }

    /// 본문, 위치, 기온만 수정합니다.
    pub async fn update_post(
        &self,
        member_id: &ObjectId,
        post_id: &str,
        request: PostUpdateRequest,
    ) -> AppResult<PostResponse> {
        request.validate()?;

        let mut post = self.find_post(post_id).await?;
        Self::ensure_owner(&post, member_id)?;

        post.update(request.content, request.location, request.temperature);

        let updated = self
            .post_repo
            .update_details(&post)
            .await?
            .ok_or_else(|| AppError::NotFound(POST_NOT_FOUND_MESSAGE.to_string()))?;

        info!("게시글 수정: {}", post_id);
        Ok(PostResponse::for_viewer(updated, Some(member_id)))
    }

    /// 게시글을 지우고 첨부 파일을 스토리지에서 정리합니다.
    pub async fn delete_post(&self, member_id: &ObjectId, post_id: &str) -> AppResult<()> {
        let post = self.find_post(post_id).await?;
        Self::ensure_owner(&post, member_id)?;

        let id = post
            .id
            .ok_or_else(|| AppError::InternalError("저장되지 않은 게시글입니다".to_string()))?;

        if !self.post_repo.delete(&id).await? {
            return Err(AppError::NotFound(POST_NOT_FOUND_MESSAGE.to_string()));
        }

        self.remove_media_files(&post.media_files).await;

        info!("🗑️ 게시글 삭제: {}", post_id);
        Ok(())
    }

    pub async fn like_post(&self, member_id: &ObjectId, post_id: &str) -> AppResult<PostResponse> {
        let id = parse_post_id(post_id)?;
        self.ensure_member_exists(member_id).await?;

        let post = self
            .post_repo
            .add_like(&id, member_id)
            .await?
            .ok_or_else(|| AppError::NotFound(POST_NOT_FOUND_MESSAGE.to_string()))?;

        Ok(PostResponse::for_viewer(post, Some(member_id)))
    }

    pub async fn unlike_post(&self, member_id: &ObjectId, post_id: &str) -> AppResult<PostResponse> {
        let id = parse_post_id(post_id)?;
        self.ensure_member_exists(member_id).await?;

        let post = self
            .post_repo
            .remove_like(&id, member_id)
            .await?
            .ok_or_else(|| AppError::NotFound(POST_NOT_FOUND_MESSAGE.to_string()))?;

        Ok(PostResponse::for_viewer(post, Some(member_id)))
    }

    /// 탈퇴한 회원의 토큰은 만료 전까지 유효하므로 저장소에서 다시 확인합니다.
    async fn ensure_member_exists(&self, member_id: &ObjectId) -> AppResult<()> {
        if self.member_repo.find_by_id(member_id).await?.is_none() {
            return Err(AppError::NotFound(MEMBER_NOT_FOUND_MESSAGE.to_string()));
        }
        Ok(())
    }

    async fn remove_media_files(&self, media_files: &[MediaFile]) {
        for media_file in media_files {
            if let Err(e) = self.uploader.delete_file(&media_file.key).await {
                warn!("첨부 파일 삭제 실패: {} - {}", media_file.key, e);
            }
        }
    }

    async fn find_post(&self, post_id: &str) -> AppResult<Post> {
        let id = parse_post_id(post_id)?;

        self.post_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::NotFound(POST_NOT_FOUND_MESSAGE.to_string()))
    }

    fn ensure_owner(post: &Post, member_id: &ObjectId) -> AppResult<()> {
        if post.is_owned_by(member_id) {
            Ok(())
        } else {
            warn!("작성자가 아닌 회원의 게시글 변경 시도: member={}", member_id);
            Err(AppError::AuthorizationError("게시글 작성자만 변경할 수 있습니다".to_string()))
        }
    }
}

/// 형식이 잘못된 ID는 존재하지 않는 게시글로 취급합니다.
fn parse_post_id(post_id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(post_id).map_err(|_| AppError::NotFound(POST_NOT_FOUND_MESSAGE.to_string()))
}
