//! SQL DDL for the shop tables.

/// SQLite schema with:
/// - `users.id` / `posts.id` INTEGER PRIMARY KEY AUTOINCREMENT
/// - `users.username` UNIQUE
/// - `posts.owner_id` referencing `users(id)`; only enforced when the
///   connection turns `foreign_keys` on, which `ShopStorage` does not
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_users_username ON users(username);

CREATE TABLE IF NOT EXISTS posts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    caption TEXT NOT NULL,
    image_url TEXT NOT NULL,
    owner_id INTEGER NOT NULL REFERENCES users(id)
);

CREATE INDEX IF NOT EXISTS idx_posts_owner_id ON posts(owner_id);
"#;
