/**
 * Recipe Repository
 *
 * Typed recipe operations on top of a `RecipeStore`.
 *
 * # Operations
 *
 * - `list_recipes` - every recipe, ordered by title (byte-wise compare)
 * - `get_recipe` - one recipe by id, `NotFound` when missing
 * - `up_vote` / `down_vote` - atomic counter increments; the returned recipe
 *   is the store's post-update document
 * - `add_recipe` - validate, assign an id, insert, read back
 * - `bulk_upsert` - upsert every recipe, collecting failures instead of
 *   stopping at the first one
 */

use std::sync::Arc;

use crate::backend::db::store::{RecipeStore, VoteField};
use crate::backend::error::BackendError;
use crate::shared::{NewRecipe, Recipe};

#[derive(Clone)]
pub struct RecipeRepository {
    store: Arc<dyn RecipeStore>,
}

impl RecipeRepository {
    pub fn new(store: Arc<dyn RecipeStore>) -> Self {
        Self { store }
    }

    /// Whether the underlying store client is initialized
    pub fn is_ready(&self) -> bool {
        self.store.is_ready()
    }

    /// All recipes sorted ascending by title
    pub async fn list_recipes(&self) -> Result<Vec<Recipe>, BackendError> {
        let mut recipes = self.store.find_all().await?;
        recipes.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(recipes)
    }

    pub async fn get_recipe(&self, id: &str) -> Result<Recipe, BackendError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| BackendError::not_found(id))
    }

    pub async fn up_vote(&self, id: &str) -> Result<Recipe, BackendError> {
        self.vote(id, VoteField::Up).await
    }

    pub async fn down_vote(&self, id: &str) -> Result<Recipe, BackendError> {
        self.vote(id, VoteField::Down).await
    }

    async fn vote(&self, id: &str, field: VoteField) -> Result<Recipe, BackendError> {
        self.store
            .increment(id, field)
            .await?
            .ok_or_else(|| BackendError::not_found(id))
    }

    /// Validate and insert a new recipe, returning the stored document
    ///
    /// # Errors
    ///
    /// - `SharedError::ValidationError` if `title` or `image` is empty; the
    ///   store is not touched in that case
    /// - `StoreError` if the insert or the read-back fails
    pub async fn add_recipe(&self, new_recipe: NewRecipe) -> Result<Recipe, BackendError> {
        new_recipe.validate()?;

        let recipe = new_recipe.into_recipe();
        self.store.insert(&recipe).await?;

        self.store
            .find_by_id(&recipe.id)
            .await?
            .ok_or_else(|| {
                BackendError::store(format!("recipe {} missing right after insert", recipe.id))
            })
    }

    /// Upsert every recipe by id
    ///
    /// Returns how many recipes were written. If any upsert fails the others
    /// are still attempted and all failures come back together as one
    /// `AggregateLoadError`.
    pub async fn bulk_upsert(&self, recipes: &[Recipe]) -> Result<usize, BackendError> {
        let mut failures = Vec::new();

        for recipe in recipes {
            if let Err(e) = self.store.upsert(recipe).await {
                tracing::error!("failed to load recipe {}: {}", recipe.id, e);
                failures.push(format!("recipe {}: {}", recipe.id, e));
            }
        }

        if failures.is_empty() {
            Ok(recipes.len())
        } else {
            Err(BackendError::AggregateLoadError { failures })
        }
    }
}
