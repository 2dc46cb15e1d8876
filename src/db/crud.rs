//! Data access functions. Each runs on the caller's session and commits
//! as soon as its statement completes.

use crate::db::models::{DbPost, DbUser};
use crate::error::ShopError;
use crate::types::{PostCreate, UserCreate};
use sqlx::SqliteConnection;

/// Insert a user with the credential stored as submitted.
///
/// A taken username surfaces as `ShopError::Database` carrying the
/// UNIQUE violation.
pub async fn create_user(
    conn: &mut SqliteConnection,
    user: &UserCreate,
) -> Result<DbUser, ShopError> {
    let row = sqlx::query_as::<_, DbUser>(
        r#"INSERT INTO users (username, password_hash) VALUES (?, ?)
           RETURNING id, username, password_hash"#,
    )
    .bind(&user.username)
    .bind(&user.password)
    .fetch_one(&mut *conn)
    .await?;
    Ok(row)
}

/// Up to `limit` posts starting at `skip`, in whatever order SQLite yields.
///
/// Both values reach SQLite untouched, so a negative `limit` means no limit.
pub async fn get_posts(
    conn: &mut SqliteConnection,
    skip: i64,
    limit: i64,
) -> Result<Vec<DbPost>, ShopError> {
    let rows = sqlx::query_as::<_, DbPost>(
        "SELECT id, caption, image_url, owner_id FROM posts LIMIT ? OFFSET ?",
    )
    .bind(limit)
    .bind(skip)
    .fetch_all(&mut *conn)
    .await?;
    Ok(rows)
}

/// Insert a post owned by `owner_id`. The owner is not looked up.
pub async fn create_post(
    conn: &mut SqliteConnection,
    post: &PostCreate,
    owner_id: i64,
) -> Result<DbPost, ShopError> {
    let row = sqlx::query_as::<_, DbPost>(
        r#"INSERT INTO posts (caption, image_url, owner_id) VALUES (?, ?, ?)
           RETURNING id, caption, image_url, owner_id"#,
    )
    .bind(&post.caption)
    .bind(&post.image_url)
    .bind(owner_id)
    .fetch_one(&mut *conn)
    .await?;
    Ok(row)
}

pub async fn posts_by_owner(
    conn: &mut SqliteConnection,
    owner_id: i64,
) -> Result<Vec<DbPost>, ShopError> {
    let rows = sqlx::query_as::<_, DbPost>(
        "SELECT id, caption, image_url, owner_id FROM posts WHERE owner_id = ? ORDER BY id",
    )
    .bind(owner_id)
    .fetch_all(&mut *conn)
    .await?;
    Ok(rows)
}
