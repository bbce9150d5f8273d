//! Common test utilities and helpers
//!
//! - Recipe fixtures
//! - A `TestServer` over the in-memory store
//! - `FailingStore`, a store whose every operation fails
//! - Custom assertion macros

#![allow(dead_code)]

pub mod assertions;

use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use recipes::backend::db::{MemoryRecipeStore, RecipeStore, VoteField};
use recipes::backend::server::create_app;
use recipes::backend::{BackendError, RecipeRepository};
use recipes::shared::Recipe;

/// A handful of recipes in no particular order
pub fn sample_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new("r-ramen", "Shoyu Ramen", "http://x/ramen.png"),
        Recipe::new("r-bibimbap", "Bibimbap", "http://x/bibimbap.png"),
        Recipe::new("r-pho", "Pho", "http://x/pho.png"),
    ]
}

/// Repository over a fresh memory store seeded with `recipes`
///
/// The store is returned too so tests can inspect it or flip readiness.
pub fn memory_repository(recipes: Vec<Recipe>) -> (RecipeRepository, Arc<MemoryRecipeStore>) {
    let store = Arc::new(MemoryRecipeStore::with_recipes(recipes));
    (RecipeRepository::new(store.clone()), store)
}

/// Test server over `sample_recipes`
pub fn create_test_server() -> (TestServer, Arc<MemoryRecipeStore>) {
    let (repository, store) = memory_repository(sample_recipes());
    let app = create_app(repository).expect("Failed to create app");
    (TestServer::new(app).expect("Failed to start test server"), store)
}

/// Store that is connected but fails every query and write
pub struct FailingStore;

#[async_trait]
impl RecipeStore for FailingStore {
    async fn find_all(&self) -> Result<Vec<Recipe>, BackendError> {
        Err(BackendError::store("can't get recipes: connection reset"))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Recipe>, BackendError> {
        Err(BackendError::store(format!("can't get recipe {}: connection reset", id)))
    }

    async fn increment(&self, id: &str, _field: VoteField) -> Result<Option<Recipe>, BackendError> {
        Err(BackendError::store(format!("can't update recipe {}: connection reset", id)))
    }

    async fn insert(&self, _recipe: &Recipe) -> Result<(), BackendError> {
        Err(BackendError::store("can't insert recipe: connection reset"))
    }

    async fn upsert(&self, recipe: &Recipe) -> Result<(), BackendError> {
        Err(BackendError::store(format!("can't upsert recipe {}: connection reset", recipe.id)))
    }

    fn is_ready(&self) -> bool {
        true
    }
}

/// Test server whose store fails every operation
pub fn create_failing_test_server() -> TestServer {
    let repository = RecipeRepository::new(Arc::new(FailingStore));
    let app = create_app(repository).expect("Failed to create app");
    TestServer::new(app).expect("Failed to start test server")
}
