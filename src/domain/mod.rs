//! # Domain Module
//!
//! ```text
//! domain/
//! ├── entities/  ← MongoDB 문서와 매핑되는 엔티티 (Member, Post)
//! ├── dto/       ← HTTP 요청/응답 데이터
//! └── models/    ← 인증 정보, 토큰 클레임, 업로드 파일
//! ```

pub mod entities;
pub mod dto;
pub mod models;
