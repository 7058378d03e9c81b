//! Record store: the persistence interface behind the breed service and the importer.
//!
//! Engines are picked from the database URL scheme. Each statement is issued on its own;
//! isolation and atomicity are whatever the engine gives a single statement.

/// Bind every parameter of a built query, in placeholder order.
macro_rules! bind_params {
    ($query:expr, $params:expr) => {
        $params.iter().fold($query, |q, p| match p {
            $crate::sql::BindValue::Int(n) => q.bind(*n),
            $crate::sql::BindValue::Float(f) => q.bind(*f),
            $crate::sql::BindValue::Text(s) => q.bind(s.clone()),
        })
    };
}

mod postgres;
mod sqlite;

pub use postgres::{ensure_database_exists, PgBreedStore};
pub use sqlite::SqliteBreedStore;

use crate::error::{ConfigError, StoreError};
use crate::model::{Breed, BreedChanges, BreedFilter, NewBreed};
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait BreedStore: Send + Sync {
    /// Create the breeds table if missing.
    async fn ensure_schema(&self) -> Result<(), StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;

    /// Insert one row; returns the assigned id. Ids grow in insertion order.
    async fn insert(&self, breed: &NewBreed) -> Result<i64, StoreError>;

    async fn query_by_id(&self, id: i64) -> Result<Option<Breed>, StoreError>;

    async fn query_all(&self, filter: &BreedFilter) -> Result<Vec<Breed>, StoreError>;

    /// Returns the number of rows affected (0 when the id does not exist).
    async fn update(&self, id: i64, changes: &BreedChanges) -> Result<u64, StoreError>;

    /// Returns the number of rows affected (0 when the id does not exist).
    async fn delete(&self, id: i64) -> Result<u64, StoreError>;
}

/// Engine selected by URL scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Engine {
    Postgres,
    Sqlite,
}

impl Engine {
    pub fn from_url(url: &str) -> Result<Self, ConfigError> {
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Ok(Engine::Postgres)
        } else if url.starts_with("sqlite:") {
            Ok(Engine::Sqlite)
        } else {
            let scheme = url.split(':').next().unwrap_or(url);
            Err(ConfigError::UnsupportedDatabase(scheme.to_string()))
        }
    }
}

/// Open the store for `database_url`. For PostgreSQL the target database is created first if needed.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<Arc<dyn BreedStore>, StoreError> {
    let engine = Engine::from_url(database_url).map_err(|e| StoreError::InvalidUrl(e.to_string()))?;
    let store: Arc<dyn BreedStore> = match engine {
        Engine::Postgres => {
            ensure_database_exists(database_url).await?;
            Arc::new(PgBreedStore::connect(database_url, max_connections).await?)
        }
        Engine::Sqlite => Arc::new(SqliteBreedStore::connect(database_url, max_connections).await?),
    };
    tracing::info!(engine = ?engine, "connected to record store");
    Ok(store)
}
