//! # Repository Layer
//!
//! 서비스 계층이 의존하는 저장소 trait과 MongoDB 구현체를 제공합니다.
//!
//! | trait | MongoDB 구현 | 컬렉션 |
//! |-------|--------------|--------|
//! | [`MemberRepository`](members::MemberRepository) | [`MongoMemberRepository`](members::MongoMemberRepository) | `members` |
//! | [`PostRepository`](posts::PostRepository) | [`MongoPostRepository`](posts::MongoPostRepository) | `posts` |

pub mod members;
pub mod posts;

#[cfg(test)]
pub mod memory;

use mongodb::error::{ErrorKind, WriteFailure};

const DUPLICATE_KEY_CODE: i32 = 11000;

/// 유니크 인덱스 위반(E11000) 여부
pub(crate) fn is_duplicate_key_error(error: &mongodb::error::Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        _ => false,
    }
}
