//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
    #[error("unsupported database url scheme: {0}")]
    UnsupportedDatabase(String),
}

/// Failure reported by a record store engine.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("invalid DATABASE_URL: {0}")]
    InvalidUrl(String),
}

/// CSV import failures. Fatal to startup.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("cannot open file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot read CSV file: {0}")]
    Read(#[from] csv::Error),
    #[error("invalid format line {line}: expected 6 columns, found {found}")]
    MalformedRow { line: usize, found: usize },
    #[error("invalid {column} at line {line}: '{value}'")]
    InvalidWeight {
        line: usize,
        column: &'static str,
        value: String,
    },
    #[error("failed to insert record at line {line}: {source}")]
    InsertFailed {
        line: usize,
        #[source]
        source: StoreError,
    },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("not found: {0}")]
    NotFound(String),
    /// Store failure; `context` is the message shown to the client.
    #[error("{context}: {source}")]
    Store {
        context: &'static str,
        #[source]
        source: StoreError,
    },
}

impl AppError {
    pub fn store(context: &'static str) -> impl FnOnce(StoreError) -> AppError {
        move |source| AppError::Store { context, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(message) => {
                tracing::error!(%message, "bad request");
                (StatusCode::BAD_REQUEST, message).into_response()
            }
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message).into_response(),
            AppError::Store { context, source } => {
                tracing::error!(error = %source, "{context}");
                (StatusCode::INTERNAL_SERVER_ERROR, context).into_response()
            }
        }
    }
}
