//! # 회원 서비스
//!
//! 회원 가입, 로그인, 프로필 관리, 탈퇴를 담당합니다.
//!
//! ```text
//! signup ─▶ 입력 검증 ─▶ 이메일 중복 확인 ─▶ bcrypt 해싱 ─▶ members 저장
//! login  ─▶ 회원 조회 ─▶ 비밀번호 검증 ─▶ 액세스 토큰 발급 (201)
//! delete ─▶ 게시글 삭제 ─▶ 좋아요 취소 ─▶ 회원 삭제 ─▶ 첨부 파일/프로필 이미지 삭제
//! ```
//!
//! 스토리지 정리(이전 프로필 이미지, 게시글 첨부 파일)는 DB 반영이 끝난 뒤에 하며,
//! 실패해도 요청을 실패시키지 않고 경고 로그만 남깁니다.
//! 프로필 이미지는 이 서비스가 올린 객체(`Member::image_key`)만 지웁니다.

use std::sync::Arc;

use bcrypt::{hash, verify};
use log::{debug, info, warn};
use mongodb::bson::oid::ObjectId;
use validator::Validate;

use crate::domain::dto::members::{
    LoginRequest, LoginResponse, MemberResponse, SignupRequest, SignupResponse, UpdateMemberRequest,
};
use crate::domain::entities::members::Member;
use crate::domain::models::upload::UploadedFile;
use crate::errors::{AppError, AppResult};
use crate::repositories::members::{MemberRepository, DUPLICATE_EMAIL_MESSAGE};
use crate::repositories::posts::PostRepository;
use crate::services::auth::TokenProvider;
use crate::services::storage::S3Uploader;

const SIGNUP_SUCCESS_MESSAGE: &str = "Signup Successful";
const INVALID_CREDENTIALS_MESSAGE: &str = "잘못된 이메일 또는 비밀번호입니다";
pub(crate) const MEMBER_NOT_FOUND_MESSAGE: &str = "회원을 찾을 수 없습니다";

pub struct MemberService {
    member_repo: Arc<dyn MemberRepository>,
    post_repo: Arc<dyn PostRepository>,
    token_provider: Arc<TokenProvider>,
    uploader: Arc<S3Uploader>,
    bcrypt_cost: u32,
}

impl MemberService {
    pub fn new(
        member_repo: Arc<dyn MemberRepository>,
        post_repo: Arc<dyn PostRepository>,
        token_provider: Arc<TokenProvider>,
        uploader: Arc<S3Uploader>,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            member_repo,
            post_repo,
            token_provider,
            uploader,
            bcrypt_cost,
        }
    }

    /// 회원 가입
    ///
    /// # 반환값
    ///
    /// * `Err(AppError::FieldValidation)` - 이메일, 비밀번호, 전화번호 등 형식 오류
    /// * `Err(AppError::ConflictError)` - 이미 가입된 이메일
    pub async fn signup(&self, request: SignupRequest) -> AppResult<SignupResponse> {
        request.validate()?;

        if self.member_repo.exists_by_email(&request.email).await? {
            warn!("중복 이메일로 가입 시도: {}", request.email);
            return Err(AppError::ConflictError(DUPLICATE_EMAIL_MESSAGE.to_string()));
        }

        let hash_start = std::time::Instant::now();
        let password_hash = hash(&request.password, self.bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
        debug!("Password hashing took: {:?}", hash_start.elapsed());

        let gender = request.gender();
        let member = Member::new(
            request.name,
            request.email,
            password_hash,
            request.nickname,
            request.phone_number,
        )
        .with_address(request.address)
        .with_image_url(request.image_url)
        .with_gender(gender);

        let created = self.member_repo.create(member).await?;
        info!("✅ 회원 가입: {}", created.email);

        Ok(SignupResponse {
            message: SIGNUP_SUCCESS_MESSAGE.to_string(),
            member: created.into(),
        })
    }

    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        request.validate()?;

        let member = self.verify_password(&request.email, &request.password).await?;
        let member_id = member
            .id_string()
            .ok_or_else(|| AppError::InternalError("회원 ID가 없습니다".to_string()))?;

        let access_token = self.token_provider.create_access_token(&member.email, &member_id)?;
        info!("🔑 로그인 성공: {}", member.email);

        Ok(LoginResponse {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.token_provider.expires_in(),
            member: member.into(),
        })
    }

    async fn verify_password(&self, email: &str, password: &str) -> AppResult<Member> {
        let member = self
            .member_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::AuthenticationError(INVALID_CREDENTIALS_MESSAGE.to_string()))?;

        let is_valid = verify(password, &member.password)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;

        if !is_valid {
            warn!("로그인 실패 (비밀번호 불일치): {}", email);
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS_MESSAGE.to_string()));
        }

        Ok(member)
    }

    pub async fn get_member(&self, member_id: &ObjectId) -> AppResult<MemberResponse> {
        Ok(self.find_member(member_id).await?.into())
    }

    pub async fn update_profile(
        &self,
        member_id: &ObjectId,
        request: UpdateMemberRequest,
    ) -> AppResult<MemberResponse> {
        request.validate()?;

        let mut member = self.find_member(member_id).await?;
        member.update_profile(request.into());
        self.member_repo.update(&member).await?;

        info!("회원 정보 수정: {}", member.email);
        Ok(member.into())
    }

    /// 새 이미지를 올린 뒤 회원 정보를 바꾸고, 이전에 올린 이미지는 지웁니다.
    pub async fn change_profile_image(
        &self,
        member_id: &ObjectId,
        file: UploadedFile,
    ) -> AppResult<MemberResponse> {
        let mut member = self.find_member(member_id).await?;

        let uploaded = self.uploader.upload_profile_image(file).await?;
        let previous_key = member.change_image(uploaded.url, uploaded.key.clone());

        if let Err(e) = self.member_repo.update(&member).await {
            self.remove_stored_image(&uploaded.key).await;
            return Err(e);
        }

        if let Some(key) = previous_key {
            self.remove_stored_image(&key).await;
        }

        info!("프로필 이미지 변경: {}", member.email);
        Ok(member.into())
    }

    /// 회원 탈퇴. 작성한 게시글과 첨부 파일도 함께 삭제합니다.
    pub async fn delete_member(&self, member_id: &ObjectId) -> AppResult<()> {
        let member = self.find_member(member_id).await?;

        let posts = self.post_repo.find_by_member(member_id).await?;
        let deleted_posts = self.post_repo.delete_by_member(member_id).await?;
        let unliked_posts = self.post_repo.remove_likes_by_member(member_id).await?;

        if !self.member_repo.delete(member_id).await? {
            return Err(AppError::NotFound(MEMBER_NOT_FOUND_MESSAGE.to_string()));
        }

        for media_file in posts.iter().flat_map(|post| post.media_files.iter()) {
            if let Err(e) = self.uploader.delete_file(&media_file.key).await {
                warn!("첨부 파일 삭제 실패: {} - {}", media_file.key, e);
            }
        }

        if let Some(key) = &member.image_key {
            self.remove_stored_image(key).await;
        }

        info!(
            "🗑️ 회원 탈퇴: {} (게시글 {}개 삭제, 좋아요 {}개 취소)",
            member.email, deleted_posts, unliked_posts
        );
        Ok(())
    }

    async fn find_member(&self, member_id: &ObjectId) -> AppResult<Member> {
        self.member_repo
            .find_by_id(member_id)
            .await?
            .ok_or_else(|| AppError::NotFound(MEMBER_NOT_FOUND_MESSAGE.to_string()))
    }

    async fn remove_stored_image(&self, key: &str) {
        if let Err(e) = self.uploader.delete_file(key).await {
            warn!("프로필 이미지 삭제 실패: {} - {}", key, e);
        }
    }
}
