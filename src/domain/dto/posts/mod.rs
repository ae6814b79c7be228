pub mod request;
pub mod response;

pub use request::{PostListQuery, PostRequest, PostUpdateRequest};
pub use response::{PostListResponse, PostResponse};
