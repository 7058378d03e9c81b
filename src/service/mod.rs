//! BreedService: CRUD and search over an injected record store.

mod breeds;
mod search;
pub use breeds::BreedService;
pub use search::SearchParams;
