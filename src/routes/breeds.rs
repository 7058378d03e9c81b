//! Breed routes. `/breeds/search` is a static segment and wins over `/breeds/:id`.

use crate::handlers::breeds::{create, delete as delete_handler, list, read, search, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn breed_routes(state: AppState) -> Router {
    Router::new()
        .route("/breeds", get(list).post(create))
        .route("/breeds/search", get(search))
        .route("/breeds/:id", get(read).put(update).delete(delete_handler))
        .with_state(state)
}
