//! Search query parameters and their interpretation as a store filter.
//!
//! Bad filter values are dropped rather than rejected: `?weight=abc` behaves exactly
//! like a request without `weight`.

use crate::model::BreedFilter;
use serde::Deserialize;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct SearchParams {
    pub species: Option<String>,
    pub weight: Option<String>,
}

impl SearchParams {
    /// Collect from raw query pairs. The first `species` and the first `weight` win.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = SearchParams::default();
        for (key, value) in pairs {
            match key.as_str() {
                "species" if params.species.is_none() => params.species = Some(value),
                "weight" if params.weight.is_none() => params.weight = Some(value),
                _ => {}
            }
        }
        params
    }

    pub fn to_filter(&self) -> BreedFilter {
        let species = self.species.clone().filter(|s| !s.is_empty());
        let max_average_weight = self.weight.as_deref().filter(|w| !w.is_empty()).and_then(|w| {
            match w.parse::<f64>() {
                Ok(v) if v.is_finite() => Some(v),
                _ => {
                    tracing::debug!(weight = %w, "ignoring unparseable weight filter");
                    None
                }
            }
        });
        BreedFilter {
            species,
            max_average_weight,
        }
    }
}
