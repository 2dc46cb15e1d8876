use axum::Json;
use tracing::info;

use crate::ShopError;
use crate::db::{DbSession, crud};
use crate::types::{User, UserCreate};

/// POST /users/ -> stores the user and renders it with its posts.
pub async fn create_user(
    mut db: DbSession,
    Json(body): Json<UserCreate>,
) -> Result<Json<User>, ShopError> {
    let user = crud::create_user(&mut db, &body).await?;
    // a new id can already own posts created earlier with that owner_id
    let posts = crud::posts_by_owner(&mut db, user.id).await?;
    info!(id = user.id, username = %user.username, "created user");
    Ok(Json(User::from_db(user, posts)))
}
