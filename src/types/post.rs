use serde::{Deserialize, Serialize};

use crate::db::DbPost;

/// Body of `POST /posts/`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PostCreate {
    pub caption: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Post {
    pub id: i64,
    pub caption: String,
    pub image_url: String,
    pub owner_id: i64,
}

impl From<DbPost> for Post {
    fn from(p: DbPost) -> Self {
        Self {
            id: p.id,
            caption: p.caption,
            image_url: p.image_url,
            owner_id: p.owner_id,
        }
    }
}

/// Query of `POST /posts/`. The owner is taken on trust.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PostOwnerQuery {
    #[serde(default = "default_owner_id")]
    pub owner_id: i64,
}

/// Query of `GET /posts/`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PostListQuery {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_owner_id() -> i64 {
    1
}

fn default_limit() -> i64 {
    10
}
