//! Shared application state for all routes.

use crate::service::BreedService;
use crate::store::BreedStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub breeds: BreedService,
}

impl AppState {
    pub fn new(store: Arc<dyn BreedStore>) -> Self {
        AppState {
            breeds: BreedService::new(store),
        }
    }
}
