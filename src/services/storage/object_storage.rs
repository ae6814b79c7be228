//! 오브젝트 스토리지 접근 계층
//!
//! 업로더는 [`ObjectStorage`] trait에만 의존하고,
//! 운영 환경에서는 aws-sdk-s3 기반의 [`S3ObjectStorage`]를 사용합니다.

use std::path::Path;

use async_trait::async_trait;
use aws_sdk_s3::{
    config::{Credentials, Region},
    primitives::ByteStream,
    types::ObjectCannedAcl,
    Client,
};
use log::{debug, info};

use crate::config::S3Config;
use crate::errors::{AppError, AppResult};

#[async_trait]
pub trait ObjectStorage: Send + Sync {
    async fn put_object(&self, key: &str, content_type: Option<&str>, bytes: Vec<u8>) -> AppResult<()>;

    async fn put_file(&self, path: &Path, key: &str, content_type: Option<&str>) -> AppResult<()>;

    async fn delete_object(&self, key: &str) -> AppResult<()>;
}

/// S3(또는 MinIO 같은 S3 호환 스토리지) 구현체
///
/// 모든 객체는 `public-read` ACL로 저장됩니다.
pub struct S3ObjectStorage {
    client: Client,
    bucket: String,
}

impl S3ObjectStorage {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    /// 설정으로부터 클라이언트를 만듭니다.
    ///
    /// 정적 자격 증명이 없으면 기본 자격 증명 체인(환경 변수, 프로필, IMDS)을 따릅니다.
    /// 엔드포인트가 지정되면 path-style 주소를 사용합니다.
    pub async fn from_config(config: &S3Config) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(config.region.clone()));

        if let (Some(access_key), Some(secret_key)) =
            (&config.access_key_id, &config.secret_access_key)
        {
            let credentials = Credentials::new(
                access_key.clone(),
                secret_key.clone(),
                None,
                None,
                "social-post-backend",
            );
            loader = loader.credentials_provider(credentials);
        }

        if let Some(endpoint) = &config.endpoint {
            loader = loader.endpoint_url(endpoint);
        }

        let shared_config = loader.load().await;
        let s3_config = aws_sdk_s3::config::Builder::from(&shared_config)
            .force_path_style(config.endpoint.is_some())
            .build();

        info!("🪣 S3 클라이언트 초기화 - bucket: {}, region: {}", config.bucket, config.region);

        Self::new(Client::from_conf(s3_config), config.bucket.clone())
    }
}

#[async_trait]
impl ObjectStorage for S3ObjectStorage {
    async fn put_object(&self, key: &str, content_type: Option<&str>, bytes: Vec<u8>) -> AppResult<()> {
        let size = bytes.len();

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .set_content_type(content_type.map(str::to_string))
            .content_length(size as i64)
            .acl(ObjectCannedAcl::PublicRead)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| AppError::StorageError(format!("객체 업로드 실패 ({}): {}", key, e)))?;

        debug!("객체 업로드 완료: {} ({} bytes)", key, size);
        Ok(())
    }

    async fn put_file(&self, path: &Path, key: &str, content_type: Option<&str>) -> AppResult<()> {
        let body = ByteStream::from_path(path)
            .await
            .map_err(|e| AppError::StorageError(format!("파일 읽기 실패 ({}): {}", path.display(), e)))?;

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .set_content_type(content_type.map(str::to_string))
            .acl(ObjectCannedAcl::PublicRead)
            .body(body)
            .send()
            .await
            .map_err(|e| AppError::StorageError(format!("파일 업로드 실패 ({}): {}", key, e)))?;

        debug!("파일 업로드 완료: {}", key);
        Ok(())
    }

    async fn delete_object(&self, key: &str) -> AppResult<()> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| AppError::StorageError(format!("객체 삭제 실패 ({}): {}", key, e)))?;

        debug!("객체 삭제 완료: {}", key);
        Ok(())
    }
}
