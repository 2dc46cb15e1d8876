//! Database module: schema, row models, per-request sessions and CRUD.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database
//! - `sqlite.rs`: pool ownership and schema bootstrap
//! - `session.rs`: one pooled connection per request
//! - `crud.rs`: data access functions run on a session

pub mod crud;
pub mod models;
pub mod schema;
pub mod session;
pub mod sqlite;

pub use models::{DbPost, DbUser};
pub use schema::SQLITE_INIT;
pub use session::DbSession;
pub use sqlite::{ShopStorage, SqlitePool};
