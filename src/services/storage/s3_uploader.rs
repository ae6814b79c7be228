//! # 이미지 업로드 서비스
//!
//! multipart로 받은 파일을 오브젝트 스토리지에 올리고 공개 URL을 돌려줍니다.
//!
//! ## 객체 키 규칙
//!
//! ```text
//! {dir}/{uuid}_{원본 파일명}
//! posts/1b4e28ba-2fa1-11d2-883f-0016d3cca427_beach.jpg
//! profiles/6fa459ea-ee8a-3ca4-894e-db77e160355e_me.png
//! ```
//!
//! 게시글 첨부 파일 업로드(`upload_all`)는 부분 실패를 허용합니다.
//! 실패한 파일은 경고 로그만 남기고 건너뜁니다.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use actix_web::web;
use log::{info, warn};
use tempfile::NamedTempFile;
use uuid::Uuid;

use crate::config::S3Config;
use crate::domain::entities::posts::MediaFile;
use crate::domain::models::upload::UploadedFile;
use crate::errors::{AppError, AppResult, ErrorContext};
use crate::services::storage::ObjectStorage;

pub struct S3Uploader {
    storage: Arc<dyn ObjectStorage>,
    config: S3Config,
}

impl S3Uploader {
    pub fn new(storage: Arc<dyn ObjectStorage>, config: S3Config) -> Self {
        Self { storage, config }
    }

    /// 프로필 이미지를 업로드합니다. `image/*`가 아니면 거부합니다.
    pub async fn upload_profile_image(&self, file: UploadedFile) -> AppResult<MediaFile> {
        if !file.is_image() {
            warn!(
                "이미지 파일이 아닙니다: {} ({:?})",
                file.original_name, file.content_type
            );
            return Err(AppError::not_image_file());
        }

        self.upload(file, &self.config.profile_dir).await
    }

    /// 게시글 첨부 파일을 업로드합니다.
    ///
    /// 실패한 파일은 건너뛰며, 성공한 파일만 입력 순서대로 반환합니다.
    pub async fn upload_all(&self, files: Vec<UploadedFile>) -> Vec<MediaFile> {
        if files.is_empty() {
            return Vec::new();
        }

        let total = files.len();
        let mut uploaded = Vec::with_capacity(total);

        for file in files {
            let name = file.original_name.clone();
            match self.upload(file, &self.config.upload_dir).await {
                Ok(media_file) => uploaded.push(media_file),
                Err(e) => warn!("첨부 파일 업로드 실패, 건너뜀: {} - {}", name, e),
            }
        }

        info!("첨부 파일 업로드: {}/{} 성공", uploaded.len(), total);
        uploaded
    }

    pub async fn upload(&self, file: UploadedFile, dir_name: &str) -> AppResult<MediaFile> {
        let original_name = file.safe_name();
        let key = self.object_key(dir_name, &original_name);

        self.storage
            .put_object(&key, file.content_type.as_deref(), file.bytes)
            .await?;

        Ok(MediaFile {
            url: self.config.object_url(&key),
            key,
            content_type: file.content_type,
            original_name,
        })
    }

    /// 로컬 파일을 업로드합니다.
    pub async fn put_file(&self, path: &Path, dir_name: &str, original_name: &str) -> AppResult<MediaFile> {
        let key = self.object_key(dir_name, original_name);

        self.storage.put_file(path, &key, None).await?;

        Ok(MediaFile {
            url: self.config.object_url(&key),
            key,
            content_type: None,
            original_name: original_name.to_string(),
        })
    }

    /// 업로드된 본문을 임시 파일로 씁니다. 반환된 파일이 drop되면 삭제됩니다.
    pub async fn convert(&self, file: UploadedFile) -> AppResult<NamedTempFile> {
        let bytes = file.bytes;

        web::block(move || -> std::io::Result<NamedTempFile> {
            let mut temp_file = NamedTempFile::new()?;
            temp_file.write_all(&bytes)?;
            temp_file.flush()?;
            Ok(temp_file)
        })
        .await
        .context("임시 파일 작업 실행 실패")?
        .context("임시 파일 생성 실패")
    }

    pub async fn delete_file(&self, key: &str) -> AppResult<()> {
        self.storage.delete_object(key).await?;
        info!("🗑️ 스토리지 객체 삭제: {}", key);
        Ok(())
    }

    fn object_key(&self, dir_name: &str, original_name: &str) -> String {
        let dir = dir_name.trim_matches('/');
        if dir.is_empty() {
            format!("{}_{}", Uuid::new_v4(), original_name)
        } else {
            format!("{}/{}_{}", dir, Uuid::new_v4(), original_name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::storage::memory::InMemoryObjectStorage;

    fn config() -> S3Config {
        S3Config {
            bucket: "bucket".to_string(),
            region: "ap-northeast-2".to_string(),
            endpoint: None,
            public_base_url: Some("https://cdn.example.com".to_string()),
            upload_dir: "posts".to_string(),
            profile_dir: "profiles".to_string(),
            access_key_id: None,
            secret_access_key: None,
        }
    }

    fn uploader(storage: Arc<InMemoryObjectStorage>) -> S3Uploader {
        S3Uploader::new(storage, config())
    }

    fn image(name: &str) -> UploadedFile {
        UploadedFile::new(name, Some("image/png".to_string()), vec![1, 2, 3])
    }

    #[actix_web::test]
    async fn test_profile_image_rejects_non_image() {
        let storage = Arc::new(InMemoryObjectStorage::default());
        let uploader = uploader(storage.clone());

        let text = UploadedFile::new("notes.txt", Some("text/plain".to_string()), b"hi".to_vec());
        let result = uploader.upload_profile_image(text).await;

        match result {
            Err(AppError::NotImageFile(message)) => assert_eq!(message, "Unsupported file type"),
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(storage.object_count(), 0);
    }

    #[actix_web::test]
    async fn test_profile_image_uses_profile_dir() {
        let storage = Arc::new(InMemoryObjectStorage::default());
        let uploader = uploader(storage.clone());

        let media_file = uploader.upload_profile_image(image("me.png")).await.unwrap();

        assert!(media_file.url.starts_with("https://cdn.example.com/profiles/"));
        assert!(media_file.url.ends_with("_me.png"));
        assert!(media_file.key.starts_with("profiles/"));

        let stored = storage.get(&media_file.key).unwrap();
        assert_eq!(stored.content_type.as_deref(), Some("image/png"));
        assert_eq!(stored.bytes, vec![1, 2, 3]);
    }

    #[actix_web::test]
    async fn test_upload_all_empty_input() {
        let uploader = uploader(Arc::new(InMemoryObjectStorage::default()));

        assert!(uploader.upload_all(Vec::new()).await.is_empty());
    }

    #[actix_web::test]
    async fn test_upload_all_skips_failures() {
        let storage = Arc::new(InMemoryObjectStorage::failing_on("broken"));
        let uploader = uploader(storage.clone());

        let uploaded = uploader
            .upload_all(vec![image("a.png"), image("broken.png"), image("c.png")])
            .await;

        let names: Vec<_> = uploaded.iter().map(|m| m.original_name.as_str()).collect();
        assert_eq!(names, vec!["a.png", "c.png"]);
        assert_eq!(storage.object_count(), 2);
        assert!(uploaded.iter().all(|m| m.key.starts_with("posts/")));
    }

    #[actix_web::test]
    async fn test_upload_keys_are_unique() {
        let uploader = uploader(Arc::new(InMemoryObjectStorage::default()));

        let first = uploader.upload(image("same.png"), "posts").await.unwrap();
        let second = uploader.upload(image("same.png"), "posts").await.unwrap();

        assert_ne!(first.key, second.key);
    }

    #[actix_web::test]
    async fn test_convert_then_put_file() {
        let storage = Arc::new(InMemoryObjectStorage::default());
        let uploader = uploader(storage.clone());

        let temp_file = uploader
            .convert(UploadedFile::new("doc.bin", None, vec![9, 8, 7]))
            .await
            .unwrap();
        let path = temp_file.path().to_path_buf();

        let stored = uploader.put_file(&path, "backup", "doc.bin").await.unwrap();
        assert!(stored.key.starts_with("backup/"));
        assert_eq!(stored.url, format!("https://cdn.example.com/{}", stored.key));
        assert_eq!(storage.get(&stored.key).unwrap().bytes, vec![9, 8, 7]);

        drop(temp_file);
        assert!(!path.exists());
    }

    #[actix_web::test]
    async fn test_delete_file() {
        let storage = Arc::new(InMemoryObjectStorage::default());
        let uploader = uploader(storage.clone());

        let media_file = uploader.upload(image("x.png"), "posts").await.unwrap();
        assert!(storage.contains(&media_file.key));

        uploader.delete_file(&media_file.key).await.unwrap();
        assert!(!storage.contains(&media_file.key));
    }
}
