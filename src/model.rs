//! Breed records: the stored shape and the API view.

use serde::{Deserialize, Serialize};

/// Size category stored for breeds created through the API.
pub const UNKNOWN_PET_SIZE: &str = "Unknown";

/// Half-width of the weight band synthesized around an API-supplied average.
pub const WEIGHT_BAND: f64 = 1.0;

/// API view of a breed. `average_weight` is derived from the stored band.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Breed {
    pub id: i64,
    pub name: String,
    pub species: String,
    pub average_weight: f64,
}

/// Inbound body for create and update. Any `id` in the body is ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct BreedInput {
    pub name: String,
    pub species: String,
    pub average_weight: f64,
}

impl BreedInput {
    /// Lossy: only the midpoint survives a read back.
    pub fn weight_band(&self) -> (f64, f64) {
        (self.average_weight - WEIGHT_BAND, self.average_weight + WEIGHT_BAND)
    }

    pub fn into_new_breed(self) -> NewBreed {
        let (weight_min, weight_max) = self.weight_band();
        NewBreed {
            species: self.species,
            pet_size: UNKNOWN_PET_SIZE.to_string(),
            name: self.name,
            weight_min,
            weight_max,
        }
    }

    /// Update leaves `pet_size` untouched.
    pub fn into_changes(self) -> BreedChanges {
        let (weight_min, weight_max) = self.weight_band();
        BreedChanges {
            name: self.name,
            species: self.species,
            weight_min,
            weight_max,
        }
    }

    pub fn into_breed(self, id: i64) -> Breed {
        Breed {
            id,
            name: self.name,
            species: self.species,
            average_weight: self.average_weight,
        }
    }
}

/// Full row contents for insertion. `weight_min <= weight_max` is expected but not checked.
#[derive(Clone, Debug, PartialEq)]
pub struct NewBreed {
    pub species: String,
    pub pet_size: String,
    pub name: String,
    pub weight_min: f64,
    pub weight_max: f64,
}

/// Replacement values for an existing row.
#[derive(Clone, Debug, PartialEq)]
pub struct BreedChanges {
    pub name: String,
    pub species: String,
    pub weight_min: f64,
    pub weight_max: f64,
}

/// Optional search predicates; both `None` selects every row.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BreedFilter {
    pub species: Option<String>,
    pub max_average_weight: Option<f64>,
}

impl BreedFilter {
    pub fn is_empty(&self) -> bool {
        self.species.is_none() && self.max_average_weight.is_none()
    }
}
