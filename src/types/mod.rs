//! Request and response shapes for the HTTP surface.

pub mod post;
pub mod upload;
pub mod user;

pub use post::{Post, PostCreate, PostListQuery, PostOwnerQuery};
pub use upload::UploadedFile;
pub use user::{User, UserCreate};
