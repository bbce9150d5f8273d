//! In-process recipe store
//!
//! Keeps documents in insertion order behind a single `RwLock`, so counter
//! increments are atomic with respect to each other just like `$inc`. Used
//! by the test suites and by `RECIPES_STORE=memory` local runs.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::backend::db::store::{RecipeStore, VoteField};
use crate::backend::error::BackendError;
use crate::shared::Recipe;

#[derive(Debug)]
pub struct MemoryRecipeStore {
    recipes: RwLock<Vec<Recipe>>,
    ready: AtomicBool,
    writes: AtomicUsize,
}

impl MemoryRecipeStore {
    pub fn new() -> Self {
        Self::with_recipes(Vec::new())
    }

    pub fn with_recipes(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes: RwLock::new(recipes),
            ready: AtomicBool::new(true),
            writes: AtomicUsize::new(0),
        }
    }

    /// Mark the store as (un)initialized; drives the health check
    pub fn set_ready(&self, ready: bool) {
        self.ready.store(ready, Ordering::SeqCst);
    }

    /// Number of successful inserts and upserts so far
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Copy of the stored documents
    pub async fn snapshot(&self) -> Vec<Recipe> {
        self.recipes.read().await.clone()
    }
}

impl Default for MemoryRecipeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecipeStore for MemoryRecipeStore {
    async fn find_all(&self) -> Result<Vec<Recipe>, BackendError> {
        Ok(self.recipes.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Recipe>, BackendError> {
        let recipes = self.recipes.read().await;
        Ok(recipes.iter().find(|r| r.id == id).cloned())
    }

    async fn increment(&self, id: &str, field: VoteField) -> Result<Option<Recipe>, BackendError> {
        let mut recipes = self.recipes.write().await;
        let Some(recipe) = recipes.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };

        match field {
            VoteField::Up => recipe.up_votes += 1,
            VoteField::Down => recipe.down_votes += 1,
        }
        Ok(Some(recipe.clone()))
    }

    async fn insert(&self, recipe: &Recipe) -> Result<(), BackendError> {
        let mut recipes = self.recipes.write().await;
        if recipes.iter().any(|r| r.id == recipe.id) {
            return Err(BackendError::store(format!(
                "can't insert recipe: duplicate id {}",
                recipe.id
            )));
        }

        recipes.push(recipe.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn upsert(&self, recipe: &Recipe) -> Result<(), BackendError> {
        let mut recipes = self.recipes.write().await;
        match recipes.iter_mut().find(|r| r.id == recipe.id) {
            Some(existing) => *existing = recipe.clone(),
            None => recipes.push(recipe.clone()),
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_increment_returns_updated_document() {
        let store = MemoryRecipeStore::with_recipes(vec![Recipe::new("a", "A", "http://x/a")]);

        let updated = store.increment("a", VoteField::Up).await.unwrap().unwrap();
        assert_eq!(updated.up_votes, 1);

        let updated = store.increment("a", VoteField::Down).await.unwrap().unwrap();
        assert_eq!(updated.up_votes, 1);
        assert_eq!(updated.down_votes, 1);
    }

    #[tokio::test]
    async fn test_increment_unknown_id() {
        let store = MemoryRecipeStore::new();
        assert!(store.increment("nope", VoteField::Up).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicate_id() {
        let store = MemoryRecipeStore::new();
        let recipe = Recipe::new("a", "A", "http://x/a");

        store.insert(&recipe).await.unwrap();
        assert!(store.insert(&recipe).await.is_err());
        assert_eq!(store.write_count(), 1);
    }

    #[tokio::test]
    async fn test_upsert_replaces_fields() {
        let store = MemoryRecipeStore::new();
        store.upsert(&Recipe::new("a", "A", "http://x/a")).await.unwrap();
        store.upsert(&Recipe::new("a", "B", "http://x/b")).await.unwrap();

        let recipes = store.snapshot().await;
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].title, "B");
    }

    #[tokio::test]
    async fn test_concurrent_increments_are_not_lost() {
        let store = std::sync::Arc::new(MemoryRecipeStore::with_recipes(vec![Recipe::new(
            "a", "A", "http://x/a",
        )]));

        let tasks: Vec<_> = (0..50)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.increment("a", VoteField::Up).await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let recipe = store.find_by_id("a").await.unwrap().unwrap();
        assert_eq!(recipe.up_votes, 50);
    }
}
