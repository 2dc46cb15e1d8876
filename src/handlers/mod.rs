pub mod posts;
pub mod upload;
pub mod users;
