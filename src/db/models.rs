use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row of the `users` table.
///
/// `password_hash` holds the credential exactly as submitted; nothing hashes it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbUser {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
}

/// Row of the `posts` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbPost {
    pub id: i64,
    pub caption: String,
    pub image_url: String,
    pub owner_id: i64,
}
