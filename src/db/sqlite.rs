use crate::db::schema::SQLITE_INIT;
use crate::error::ShopError;
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::info;

pub type SqlitePool = Pool<Sqlite>;

/// Process-wide handle on the shop database.
#[derive(Clone)]
pub struct ShopStorage {
    pool: SqlitePool,
}

impl ShopStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating the file if missing) and bootstrap the schema.
    ///
    /// Foreign keys stay off so posts may name owners that do not exist.
    pub async fn connect(database_url: &str) -> Result<Self, ShopError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(false);
        let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
        let storage = Self::new(pool);
        storage.init_schema().await?;
        info!(database_url = %database_url, "database ready");
        Ok(storage)
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), ShopError> {
        // sqlx::query runs a single statement
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Check out one connection for the duration of a request.
    pub async fn session(&self) -> Result<PoolConnection<Sqlite>, ShopError> {
        Ok(self.pool.acquire().await?)
    }
}
