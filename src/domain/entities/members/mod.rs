pub mod member;

pub use member::{Gender, Member, ProfileChanges, Role, DEFAULT_PROFILE_IMAGE_URL};
