//! Breed registry: CRUD and search over breed records, seeded from CSV at startup.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod import;
pub mod model;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::ServiceConfig;
pub use error::{AppError, ConfigError, ImportError, StoreError};
pub use import::{import_breeds, import_from_reader};
pub use model::{Breed, BreedChanges, BreedFilter, BreedInput, NewBreed};
pub use routes::{breed_routes, build_router, common_routes_with_ready};
pub use service::{BreedService, SearchParams};
pub use state::AppState;
pub use store::{connect, BreedStore, PgBreedStore, SqliteBreedStore};
