pub mod hashtag;
pub mod media_file;
pub mod post;

pub use hashtag::Hashtag;
pub use media_file::MediaFile;
pub use post::Post;
