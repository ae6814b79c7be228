//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 핵심 엔티티들을 정의합니다.
//!
//! ```text
//! members  ── Member
//! posts    ── Post
//!              ├── media_files: [MediaFile]
//!              └── hashtags:    [Hashtag]
//! ```
//!
//! 첨부 파일과 해시태그는 게시글 문서에 포함되어 함께 저장되고 함께 삭제됩니다.
//! 게시글은 항상 한 명의 작성자(`member_id`)를 가집니다.

pub mod members;
pub mod posts;

pub use members::{Gender, Member, ProfileChanges, Role, DEFAULT_PROFILE_IMAGE_URL};
pub use posts::{Hashtag, MediaFile, Post};
