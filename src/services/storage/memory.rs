//! 테스트용 메모리 오브젝트 스토리지

use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::errors::{AppError, AppResult};
use crate::services::storage::ObjectStorage;

#[derive(Debug, Clone, PartialEq)]
pub struct StoredObject {
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// 키에 `fail_marker`가 들어간 업로드는 실패시킵니다.
#[derive(Default)]
pub struct InMemoryObjectStorage {
    objects: Mutex<HashMap<String, StoredObject>>,
    fail_marker: Option<String>,
}

impl InMemoryObjectStorage {
    pub fn failing_on(marker: &str) -> Self {
        Self {
            objects: Mutex::default(),
            fail_marker: Some(marker.to_string()),
        }
    }

    pub fn get(&self, key: &str) -> Option<StoredObject> {
        self.objects.lock().unwrap().get(key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.objects.lock().unwrap().contains_key(key)
    }

    pub fn object_count(&self) -> usize {
        self.objects.lock().unwrap().len()
    }

    fn check(&self, key: &str) -> AppResult<()> {
        match &self.fail_marker {
            Some(marker) if key.contains(marker.as_str()) => {
                Err(AppError::StorageError(format!("업로드 실패: {}", key)))
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl ObjectStorage for InMemoryObjectStorage {
    async fn put_object(&self, key: &str, content_type: Option<&str>, bytes: Vec<u8>) -> AppResult<()> {
        self.check(key)?;
        self.objects.lock().unwrap().insert(
            key.to_string(),
            StoredObject {
                content_type: content_type.map(str::to_string),
                bytes,
            },
        );
        Ok(())
    }

    async fn put_file(&self, path: &Path, key: &str, content_type: Option<&str>) -> AppResult<()> {
        let bytes = std::fs::read(path)
            .map_err(|e| AppError::StorageError(format!("파일 읽기 실패: {}", e)))?;
        self.put_object(key, content_type, bytes).await
    }

    async fn delete_object(&self, key: &str) -> AppResult<()> {
        self.objects.lock().unwrap().remove(key);
        Ok(())
    }
}
