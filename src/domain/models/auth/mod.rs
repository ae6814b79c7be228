pub mod authenticated_member;
pub mod authentication_request;

pub use authenticated_member::{AuthenticatedMember, OptionalMember};
pub use authentication_request::AuthMode;
