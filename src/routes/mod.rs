//! Router assembly.

pub mod breeds;
pub mod common;
pub use breeds::breed_routes;
pub use common::common_routes_with_ready;

use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Request bodies above this size are rejected.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Full application: health/readiness at the root, breed routes under `api_prefix` ("" for root).
pub fn build_router(state: AppState, api_prefix: &str) -> Router {
    let breeds = breed_routes(state.clone());
    let api = if api_prefix.is_empty() {
        breeds
    } else {
        Router::new().nest(api_prefix, breeds)
    };
    Router::new()
        .merge(common_routes_with_ready(state))
        .merge(api)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES)),
        )
}
