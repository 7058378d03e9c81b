//! PostgreSQL record store.

use super::BreedStore;
use crate::error::StoreError;
use crate::model::{Breed, BreedChanges, BreedFilter, NewBreed};
use crate::sql::{self, Dialect, QueryBuf};
use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, Postgres};
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

const DIALECT: Dialect = Dialect::Postgres;

#[derive(Clone)]
pub struct PgBreedStore {
    pool: PgPool,
}

impl PgBreedStore {
    pub fn new(pool: PgPool) -> Self {
        PgBreedStore { pool }
    }

    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl PgBreedStore {
    async fn execute(&self, q: &QueryBuf) -> Result<u64, StoreError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let result = bind_params!(sqlx::query::<Postgres>(&q.sql), q.params).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl BreedStore for PgBreedStore {
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
        let id = bind_params!(sqlx::query_scalar::<Postgres, i64>(&q.sql), q.params)
            .fetch_one(&self.pool)
            .await?;
        Ok(id)
    }

    async fn query_by_id(&self, id: i64) -> Result<Option<Breed>, StoreError> {
        let q = sql::select_by_id(DIALECT, id);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let row = bind_params!(sqlx::query_as::<Postgres, Breed>(&q.sql), q.params)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn query_all(&self, filter: &BreedFilter) -> Result<Vec<Breed>, StoreError> {
        let q = sql::select_list(DIALECT, filter);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let rows = bind_params!(sqlx::query_as::<Postgres, Breed>(&q.sql), q.params)
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

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), StoreError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = PgConnectOptions::from_str(&admin_url).map_err(|e| StoreError::InvalidUrl(e.to_string()))?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
        tracing::info!(database = %db_name, "created database");
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), StoreError> {
    let scheme_end = url.find("://").map(|i| i + 3).unwrap_or(0);
    let path_start = url
        .get(scheme_end..)
        .and_then(|rest| rest.find('/'))
        .map(|i| scheme_end + i + 1)
        .ok_or_else(|| StoreError::InvalidUrl("no database path".into()))?;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let mut parts = path_and_query.splitn(2, '?');
    let db_name = parts.next().unwrap_or("").trim();
    let query = parts.next().map(|q| format!("?{}", q)).unwrap_or_default();
    let base = url.get(..path_start).unwrap_or(url);
    Ok((format!("{}postgres{}", base, query), db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
