//! The store contract shared by every backend.

use crate::domain::{CreateStadiumRequest, Stadium};
use crate::infra::config::DatabaseBackend;
use crate::storage::postgres::PostgresStadiumStore;
use crate::storage::sqlite::SqliteStadiumStore;
use async_trait::async_trait;
use std::sync::Arc;

/// Columns selected/returned by every query, in `Stadium` field order.
pub(crate) const STADIUM_COLUMNS: &str = "id, name, sport, city, state, capacity";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("stadium {0} not found")]
    NotFound(i64),

    #[error("A stadium with this name already exists.")]
    DuplicateName,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Classifies an error raised by an INSERT/UPDATE. A unique-constraint
    /// violation can only come from `stadiums.name`.
    pub(crate) fn from_write(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => StoreError::DuplicateName,
            _ => StoreError::Database(err),
        }
    }
}

/// CRUD access to persisted stadiums.
///
/// Implementations rely on the database's `UNIQUE` constraint on `name` so that
/// concurrent writers with the same name get exactly one success.
#[async_trait]
pub trait StadiumStore: Send + Sync {
    /// All records ordered by id (insertion order).
    async fn list(&self) -> Result<Vec<Stadium>, StoreError>;

    async fn create(&self, req: &CreateStadiumRequest) -> Result<Stadium, StoreError>;

    async fn get(&self, id: i64) -> Result<Stadium, StoreError>;

    /// Replaces every field except `id`.
    async fn update(&self, id: i64, req: &CreateStadiumRequest) -> Result<Stadium, StoreError>;

    async fn delete(&self, id: i64) -> Result<(), StoreError>;

    /// Round-trips to the database; used by `/readiness`.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Opens the `backend` store at `database_url` and makes sure the `stadiums`
/// table exists.
pub async fn connect(
    backend: DatabaseBackend,
    database_url: &str,
) -> Result<Arc<dyn StadiumStore>, StoreError> {
    tracing::info!(?backend, "connecting stadium store");
    match backend {
        DatabaseBackend::Postgres => Ok(Arc::new(PostgresStadiumStore::connect(database_url).await?)),
        DatabaseBackend::Sqlite => Ok(Arc::new(SqliteStadiumStore::connect(database_url).await?)),
    }
}
