use axum::{Json, extract::Query};
use tracing::{debug, info};

use crate::ShopError;
use crate::db::{DbSession, crud};
use crate::types::{Post, PostCreate, PostListQuery, PostOwnerQuery};

/// POST /posts/?owner_id= -> stores the post under the given owner (default 1).
pub async fn create_post(
    Query(query): Query<PostOwnerQuery>,
    mut db: DbSession,
    Json(body): Json<PostCreate>,
) -> Result<Json<Post>, ShopError> {
    let post = crud::create_post(&mut db, &body, query.owner_id).await?;
    info!(id = post.id, owner_id = post.owner_id, "created post");
    Ok(Json(post.into()))
}

/// GET /posts/?skip=&limit= -> one window of posts.
pub async fn list_posts(
    Query(query): Query<PostListQuery>,
    mut db: DbSession,
) -> Result<Json<Vec<Post>>, ShopError> {
    let posts = crud::get_posts(&mut db, query.skip, query.limit).await?;
    debug!(skip = query.skip, limit = query.limit, count = posts.len(), "listed posts");
    Ok(Json(posts.into_iter().map(Post::from).collect()))
}
