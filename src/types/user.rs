use serde::{Deserialize, Serialize};

use super::post::Post;
use crate::db::{DbPost, DbUser};

/// Body of `POST /users/`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserCreate {
    pub username: String,
    pub password: String,
}

/// A user as returned to clients. The stored credential is never exposed.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub posts: Vec<Post>,
}

impl User {
    pub fn from_db(user: DbUser, posts: Vec<DbPost>) -> Self {
        Self {
            id: user.id,
            username: user.username,
            posts: posts.into_iter().map(Post::from).collect(),
        }
    }
}
