//! HTTP handlers for breed CRUD and search.

pub mod breeds;
pub use breeds::*;
