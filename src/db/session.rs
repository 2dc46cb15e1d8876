use crate::db::sqlite::ShopStorage;
use crate::error::ShopError;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use sqlx::pool::PoolConnection;
use sqlx::{Sqlite, SqliteConnection};
use std::ops::{Deref, DerefMut};
use tracing::trace;

/// A storage session scoped to one request.
///
/// Extracted before the handler body runs and dropped when the handler
/// returns, whether it succeeded, failed or unwound. Dropping hands the
/// connection back to the pool.
pub struct DbSession(PoolConnection<Sqlite>);

impl DbSession {
    pub async fn open(storage: &ShopStorage) -> Result<Self, ShopError> {
        let conn = storage.session().await?;
        trace!("storage session opened");
        Ok(Self(conn))
    }
}

impl Deref for DbSession {
    type Target = SqliteConnection;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for DbSession {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Drop for DbSession {
    fn drop(&mut self) {
        trace!("storage session released");
    }
}

impl<S> FromRequestParts<S> for DbSession
where
    S: Send + Sync,
    ShopStorage: FromRef<S>,
{
    type Rejection = ShopError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let storage = ShopStorage::from_ref(state);
        Self::open(&storage).await
    }
}
