pub mod member_repo;

pub use member_repo::{MemberRepository, MongoMemberRepository, DUPLICATE_EMAIL_MESSAGE};
