//! Stadium store implementation using SQLite (local runs and tests).

use crate::domain::{CreateStadiumRequest, Stadium};
use crate::storage::store::{StadiumStore, StoreError, STADIUM_COLUMNS};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

#[derive(Clone)]
pub struct SqliteStadiumStore {
    pool: SqlitePool,
}

impl SqliteStadiumStore {
    /// Opens `database_url`, creating the file if it is missing.
    ///
    /// An in-memory database lives only as long as its connection, so it gets a
    /// single connection that the pool never closes.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let in_memory = database_url.contains(":memory:") || database_url.contains("mode=memory");

        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };
        let pool = pool_options.connect_with(options).await?;
        Self::new_with_pool(pool).await
    }

    /// Fresh private in-memory store.
    pub async fn in_memory() -> Result<Self, StoreError> {
        Self::connect("sqlite::memory:").await
    }

    pub async fn new_with_pool(pool: SqlitePool) -> Result<Self, StoreError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS stadiums (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name VARCHAR(100) NOT NULL UNIQUE,
                sport VARCHAR(100) NOT NULL,
                city VARCHAR(100) NOT NULL,
                state VARCHAR(100) NOT NULL,
                capacity INTEGER NOT NULL DEFAULT 0
            )",
        )
        .execute(&pool)
        .await?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl StadiumStore for SqliteStadiumStore {
    async fn list(&self) -> Result<Vec<Stadium>, StoreError> {
        let sql = format!("SELECT {} FROM stadiums ORDER BY id", STADIUM_COLUMNS);
        let rows = sqlx::query_as::<_, Stadium>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn create(&self, req: &CreateStadiumRequest) -> Result<Stadium, StoreError> {
        let sql = format!(
            "INSERT INTO stadiums (name, sport, city, state, capacity)
             VALUES (?1, ?2, ?3, ?4, ?5)
             RETURNING {}",
            STADIUM_COLUMNS
        );
        sqlx::query_as::<_, Stadium>(&sql)
            .bind(req.name())
            .bind(req.sport())
            .bind(req.city())
            .bind(req.state())
            .bind(req.capacity())
            .fetch_one(&self.pool)
            .await
            .map_err(StoreError::from_write)
    }

    async fn get(&self, id: i64) -> Result<Stadium, StoreError> {
        let sql = format!("SELECT {} FROM stadiums WHERE id = ?1", STADIUM_COLUMNS);
        sqlx::query_as::<_, Stadium>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound(id))
    }

    async fn update(&self, id: i64, req: &CreateStadiumRequest) -> Result<Stadium, StoreError> {
        let sql = format!(
            "UPDATE stadiums
             SET name = ?1, sport = ?2, city = ?3, state = ?4, capacity = ?5
             WHERE id = ?6
             RETURNING {}",
            STADIUM_COLUMNS
        );
        sqlx::query_as::<_, Stadium>(&sql)
            .bind(req.name())
            .bind(req.sport())
            .bind(req.city())
            .bind(req.state())
            .bind(req.capacity())
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StoreError::from_write)?
            .ok_or(StoreError::NotFound(id))
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM stadiums WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
