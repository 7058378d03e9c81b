//! Breed handlers: list, search, create, read, update, delete.

use crate::error::AppError;
use crate::extractors::{BreedId, JsonBody};
use crate::model::BreedInput;
use crate::service::SearchParams;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let breeds = state.breeds.list().await?;
    tracing::info!(count = breeds.len(), "listed breeds");
    Ok(Json(breeds))
}

/// Missing query parameters are fine; unknown ones are ignored. A repeated key
/// uses its first value.
pub async fn search(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, AppError> {
    let params = SearchParams::from_pairs(pairs);
    let breeds = state.breeds.search(&params).await?;
    tracing::info!(species = ?params.species, weight = ?params.weight, count = breeds.len(), "searched breeds");
    Ok(Json(breeds))
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<BreedInput>,
) -> Result<impl IntoResponse, AppError> {
    let breed = state.breeds.create(input).await?;
    tracing::info!(id = breed.id, name = %breed.name, "created breed");
    Ok((StatusCode::CREATED, Json(breed)))
}

pub async fn read(State(state): State<AppState>, BreedId(id): BreedId) -> Result<impl IntoResponse, AppError> {
    tracing::info!(id, "fetching breed");
    match state.breeds.get(id).await {
        Ok(breed) => Ok(Json(breed)),
        Err(AppError::NotFound(msg)) => {
            tracing::warn!(id, "no breed with this id");
            Err(AppError::NotFound(msg))
        }
        Err(e) => Err(e),
    }
}

pub async fn update(
    State(state): State<AppState>,
    BreedId(id): BreedId,
    JsonBody(input): JsonBody<BreedInput>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(id, "updating breed");
    let affected = state.breeds.update(id, input).await?;
    if affected == 0 {
        tracing::debug!(id, "update matched no rows");
    }
    Ok(StatusCode::OK)
}

pub async fn delete(State(state): State<AppState>, BreedId(id): BreedId) -> Result<impl IntoResponse, AppError> {
    tracing::info!(id, "deleting breed");
    let affected = state.breeds.delete(id).await?;
    if affected == 0 {
        tracing::debug!(id, "delete matched no rows");
    }
    Ok(StatusCode::NO_CONTENT)
}
