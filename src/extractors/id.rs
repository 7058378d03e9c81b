//! Extract a numeric breed id from the `:id` path segment.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

#[derive(Clone, Copy, Debug)]
pub struct BreedId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for BreedId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        let id = raw
            .parse::<i64>()
            .map_err(|_| AppError::BadRequest("Invalid ID format".into()))?;
        Ok(BreedId(id))
    }
}
