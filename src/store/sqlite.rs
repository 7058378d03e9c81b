//! SQLite record store, for embedded deployments and tests.

use super::BreedStore;
use crate::error::StoreError;
use crate::model::{Breed, BreedChanges, BreedFilter, NewBreed};
use crate::sql::{self, Dialect, QueryBuf};
use async_trait::async_trait;
use sqlx::sqlite::{Sqlite, SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

const DIALECT: Dialect = Dialect::Sqlite;

#[derive(Clone)]
pub struct SqliteBreedStore {
    pool: SqlitePool,
}

impl SqliteBreedStore {
    pub fn new(pool: SqlitePool) -> Self {
        SqliteBreedStore { pool }
    }

    /// In-memory URLs get a single pinned connection; every connection would otherwise see its own empty database.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool_opts = if database_url.contains(":memory:") || database_url.contains("mode=memory") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections)
        };
        let pool = pool_opts.connect_with(opts).await?;
        Ok(Self::new(pool))
    }

    /// Fresh in-memory store with the schema applied.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let store = Self::connect("sqlite::memory:", 1).await?;
        store.ensure_schema().await?;
        Ok(store)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn execute(&self, q: &QueryBuf) -> Result<u64, StoreError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let result = bind_params!(sqlx::query::<Sqlite>(&q.sql), q.params).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl BreedStore for SqliteBreedStore {
    async fn ensure_schema(&self) -> Result<(), StoreError> {
        let ddl = sql::create_table(DIALECT);
        tracing::debug!(sql = %ddl, "query");
        sqlx::query(&ddl).execute(&self.pool).await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }

    async fn insert(&self, breed: &NewBreed) -> Result<i64, StoreError> {
        let q = sql::insert(DIALECT, breed);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let id = bind_params!(sqlx::query_scalar::<Sqlite, i64>(&q.sql), q.params)
            .fetch_one(&self.pool)
            .await?;
        Ok(id)
    }

    async fn query_by_id(&self, id: i64) -> Result<Option<Breed>, StoreError> {
        let q = sql::select_by_id(DIALECT, id);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let row = bind_params!(sqlx::query_as::<Sqlite, Breed>(&q.sql), q.params)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn query_all(&self, filter: &BreedFilter) -> Result<Vec<Breed>, StoreError> {
        let q = sql::select_list(DIALECT, filter);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let rows = bind_params!(sqlx::query_as::<Sqlite, Breed>(&q.sql), q.params)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn update(&self, id: i64, changes: &BreedChanges) -> Result<u64, StoreError> {
        self.execute(&sql::update(DIALECT, id, changes)).await
    }

    async fn delete(&self, id: i64) -> Result<u64, StoreError> {
        self.execute(&sql::delete(DIALECT, id)).await
    }
}
