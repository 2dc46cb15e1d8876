use axum::{
    Router,
    extract::{DefaultBodyLimit, FromRef},
    routing::post,
};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::ShopStorage;
use crate::handlers::{posts, upload, users};
use crate::service::UploadStore;

#[derive(Clone)]
pub struct ShopState {
    pub storage: ShopStorage,
    pub uploads: UploadStore,
}

impl ShopState {
    pub fn new(storage: ShopStorage, uploads: UploadStore) -> Self {
        Self { storage, uploads }
    }

    pub fn from_config(storage: ShopStorage, cfg: &Config) -> Self {
        Self::new(storage, UploadStore::new(cfg.upload_dir.clone()))
    }
}

impl FromRef<ShopState> for ShopStorage {
    fn from_ref(state: &ShopState) -> Self {
        state.storage.clone()
    }
}

pub fn shop_router(state: ShopState) -> Router {
    Router::new()
        .route("/users/", post(users::create_user))
        .route("/posts/", post(posts::create_post).get(posts::list_posts))
        .route(
            "/uploadfile/",
            post(upload::upload_file).layer(DefaultBodyLimit::disable()),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
