#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use serde_json::Value;
use shopfront::db::ShopStorage;
use shopfront::router::{ShopState, shop_router};
use shopfront::service::UploadStore;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};
use tower::ServiceExt;

pub const BOUNDARY: &str = "shopfront-test-boundary";

/// A router over a throwaway SQLite file and upload directory.
pub struct TestApp {
    pub app: Router,
    pub root: PathBuf,
    pub upload_dir: PathBuf,
}

impl TestApp {
    pub async fn spawn(tag: &str) -> Self {
        Self::spawn_with(tag, true).await
    }

    /// `create_uploads = false` leaves the upload directory missing.
    pub async fn spawn_with(tag: &str, create_uploads: bool) -> Self {
        let root = scratch_root(tag);
        let database_url = format!("sqlite:{}", root.join("shop.sqlite").display());
        let storage = ShopStorage::connect(&database_url)
            .await
            .expect("failed to open test database");
        Self::assemble(root, storage, create_uploads)
    }

    /// Router over a caller-built pool, for tests that constrain it.
    pub async fn spawn_with_pool(tag: &str, options: SqlitePoolOptions) -> Self {
        let root = scratch_root(tag);
        let connect_opts = SqliteConnectOptions::new()
            .filename(root.join("shop.sqlite"))
            .create_if_missing(true)
            .foreign_keys(false);
        let pool = options
            .connect_with(connect_opts)
            .await
            .expect("failed to open test database");
        let storage = ShopStorage::new(pool);
        storage.init_schema().await.expect("failed to create schema");
        Self::assemble(root, storage, true)
    }

    fn assemble(root: PathBuf, storage: ShopStorage, create_uploads: bool) -> Self {
        let upload_dir = root.join("uploads");
        if create_uploads {
            fs::create_dir_all(&upload_dir).expect("failed to create upload dir");
        }
        let state = ShopState::new(storage, UploadStore::new(&upload_dir));

        Self {
            app: shop_router(state),
            root,
            upload_dir,
        }
    }

    pub async fn send(&self, req: Request<Body>) -> Response<Body> {
        self.app.clone().oneshot(req).await.expect("request failed")
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> Response<Body> {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .expect("failed to build request"),
        )
        .await
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
    }

    pub async fn upload(&self, field: &str, filename: &str, contents: &[u8]) -> Response<Body> {
        self.upload_parts(&[(field, Some(filename), contents)]).await
    }

    /// One multipart part per `(field, filename, contents)`; `None` omits `filename=`.
    pub async fn upload_parts(&self, parts: &[(&str, Option<&str>, &[u8])]) -> Response<Body> {
        self.send(
            Request::builder()
                .method("POST")
                .uri("/uploadfile/")
                .header(
                    "content-type",
                    format!("multipart/form-data; boundary={BOUNDARY}"),
                )
                .body(Body::from(multipart_body(parts)))
                .expect("failed to build request"),
        )
        .await
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}

pub fn multipart_body(parts: &[(&str, Option<&str>, &[u8])]) -> Vec<u8> {
    let mut body = Vec::new();
    for (field, filename, contents) in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        let disposition = match filename {
            Some(name) => format!("form-data; name=\"{field}\"; filename=\"{name}\""),
            None => format!("form-data; name=\"{field}\""),
        };
        body.extend_from_slice(format!("Content-Disposition: {disposition}\r\n").as_bytes());
        body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        body.extend_from_slice(contents);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn scratch_root(tag: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut root = std::env::temp_dir();
    root.push(format!("shopfront-{tag}-{}-{}", std::process::id(), nanos));
    fs::create_dir_all(&root).expect("failed to create test root");
    root
}

pub async fn json_body(resp: Response<Body>) -> Value {
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&body).expect("response body was not json")
}
