//! Request extractors that reject with `AppError::BadRequest` (plain-text 400).

pub mod body;
pub mod id;
pub use body::JsonBody;
pub use id::BreedId;
