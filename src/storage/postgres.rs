//! Stadium store implementation using PostgreSQL.

use crate::domain::{CreateStadiumRequest, Stadium};
use crate::storage::store::{StadiumStore, StoreError, STADIUM_COLUMNS};
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// A stadium store backed by a PostgreSQL connection pool.
#[derive(Clone)]
pub struct PostgresStadiumStore {
    pool: PgPool,
}

impl PostgresStadiumStore {
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        Self::new_with_pool(pool).await
    }

    /// Wraps an existing pool, creating the `stadiums` table if needed.
    pub async fn new_with_pool(pool: PgPool) -> Result<Self, StoreError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS stadiums (
                id BIGSERIAL PRIMARY KEY,
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
impl StadiumStore for PostgresStadiumStore {
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
             VALUES ($1, $2, $3, $4, $5)
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
        let sql = format!("SELECT {} FROM stadiums WHERE id = $1", STADIUM_COLUMNS);
        sqlx::query_as::<_, Stadium>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound(id))
    }

    async fn update(&self, id: i64, req: &CreateStadiumRequest) -> Result<Stadium, StoreError> {
        let sql = format!(
            "UPDATE stadiums
             SET name = $1, sport = $2, city = $3, state = $4, capacity = $5
             WHERE id = $6
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
        let result = sqlx::query("DELETE FROM stadiums WHERE id = $1")
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
