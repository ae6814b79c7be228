pub mod request;
pub mod response;

pub use request::{LoginRequest, SignupRequest, UpdateMemberRequest};
pub use response::{LoginResponse, MemberResponse, SignupResponse};
