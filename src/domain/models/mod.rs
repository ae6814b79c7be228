pub mod auth;
pub mod token;
pub mod upload;

pub use auth::{AuthMode, AuthenticatedMember, OptionalMember};
pub use token::TokenClaims;
pub use upload::UploadedFile;
