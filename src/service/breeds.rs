//! Breed CRUD against a `BreedStore`.

use crate::error::AppError;
use crate::model::{Breed, BreedInput};
use crate::service::SearchParams;
use crate::store::BreedStore;
use std::sync::Arc;

/// Stateless apart from the store handle; rows are never cached.
#[derive(Clone)]
pub struct BreedService {
    store: Arc<dyn BreedStore>,
}

impl BreedService {
    pub fn new(store: Arc<dyn BreedStore>) -> Self {
        BreedService { store }
    }

    pub fn store(&self) -> &Arc<dyn BreedStore> {
        &self.store
    }

    /// Insert with pet_size "Unknown" and a ±1 weight band around `average_weight`.
    pub async fn create(&self, input: BreedInput) -> Result<Breed, AppError> {
        let id = self
            .store
            .insert(&input.clone().into_new_breed())
            .await
            .map_err(AppError::store("Failed to create breed"))?;
        Ok(input.into_breed(id))
    }

    pub async fn get(&self, id: i64) -> Result<Breed, AppError> {
        self.store
            .query_by_id(id)
            .await
            .map_err(AppError::store("Failed to fetch breed"))?
            .ok_or_else(|| AppError::NotFound("Breed not found".into()))
    }

    pub async fn list(&self) -> Result<Vec<Breed>, AppError> {
        self.store
            .query_all(&Default::default())
            .await
            .map_err(AppError::store("Failed to fetch breeds"))
    }

    pub async fn search(&self, params: &SearchParams) -> Result<Vec<Breed>, AppError> {
        self.store
            .query_all(&params.to_filter())
            .await
            .map_err(AppError::store("Failed to search breeds"))
    }

    /// Full replacement. Returns the affected-row count; 0 for an unknown id is not an error.
    pub async fn update(&self, id: i64, input: BreedInput) -> Result<u64, AppError> {
        self.store
            .update(id, &input.into_changes())
            .await
            .map_err(AppError::store("Failed to update breed"))
    }

    /// Returns the affected-row count; 0 for an unknown id is not an error.
    pub async fn delete(&self, id: i64) -> Result<u64, AppError> {
        self.store
            .delete(id)
            .await
            .map_err(AppError::store("Failed to delete breed"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SqliteBreedStore;

    async fn service() -> BreedService {
        BreedService::new(Arc::new(SqliteBreedStore::in_memory().await.unwrap()))
    }

    fn input(name: &str, species: &str, avg: f64) -> BreedInput {
        BreedInput {
            name: name.into(),
            species: species.into(),
            average_weight: avg,
        }
    }

    #[tokio::test]
    async fn create_then_get_round_trips_the_average() {
        let svc = service().await;
        let created = svc.create(input("Test Breed", "Test Species", 15.0)).await.unwrap();
        assert!(created.id > 0);
        assert_eq!(created.average_weight, 15.0);

        let fetched = svc.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn missing_id_is_not_found() {
        let svc = service().await;
        assert!(matches!(svc.get(12345).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn update_replaces_values() {
        let svc = service().await;
        let created = svc.create(input("A", "Dog", 10.0)).await.unwrap();
        let affected = svc.update(created.id, input("B", "Cat", 4.0)).await.unwrap();
        assert_eq!(affected, 1);
        let fetched = svc.get(created.id).await.unwrap();
        assert_eq!((fetched.name.as_str(), fetched.species.as_str()), ("B", "Cat"));
        assert_eq!(fetched.average_weight, 4.0);
    }

    #[tokio::test]
    async fn update_and_delete_of_unknown_id_succeed_with_zero() {
        let svc = service().await;
        assert_eq!(svc.update(999, input("x", "y", 1.0)).await.unwrap(), 0);
        assert_eq!(svc.delete(999).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let svc = service().await;
        let created = svc.create(input("Gone", "Dog", 8.0)).await.unwrap();
        assert_eq!(svc.delete(created.id).await.unwrap(), 1);
        assert!(matches!(svc.get(created.id).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn search_ignores_bad_weight() {
        let svc = service().await;
        svc.create(input("Beagle", "Dog", 10.0)).await.unwrap();
        svc.create(input("Mastiff", "Dog", 75.0)).await.unwrap();
        svc.create(input("Siamese", "Cat", 4.0)).await.unwrap();

        let bad = SearchParams {
            species: Some("Dog".into()),
            weight: Some("abc".into()),
        };
        let omitted = SearchParams {
            species: Some("Dog".into()),
            weight: None,
        };
        let a = svc.search(&bad).await.unwrap();
        let b = svc.search(&omitted).await.unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 2);

        let bounded = SearchParams {
            species: Some("Dog".into()),
            weight: Some("20".into()),
        };
        let hits = svc.search(&bounded).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Beagle");
        assert_eq!(svc.list().await.unwrap().len(), 3);
    }
}
