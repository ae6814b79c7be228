//! 오브젝트 스토리지와 이미지 업로드

pub mod object_storage;
pub mod s3_uploader;

#[cfg(test)]
pub mod memory;

pub use object_storage::{ObjectStorage, S3ObjectStorage};
pub use s3_uploader::S3Uploader;
