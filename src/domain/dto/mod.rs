pub mod members;
pub mod posts;

pub use members::{LoginRequest, LoginResponse, MemberResponse, SignupRequest, SignupResponse, UpdateMemberRequest};
pub use posts::{PostListQuery, PostListResponse, PostRequest, PostResponse, PostUpdateRequest};
