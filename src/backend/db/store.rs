//! Recipe store seam
//!
//! `RecipeStore` is the narrow set of document operations the repository
//! needs. Filtering by `id` and the atomic counter update happen in the
//! store; ordering and validation happen in the repository.

use async_trait::async_trait;

use crate::backend::error::BackendError;
use crate::shared::Recipe;

/// Counter touched by a vote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteField {
    Up,
    Down,
}

impl VoteField {
    /// Document field name of the counter
    pub fn field_name(self) -> &'static str {
        match self {
            VoteField::Up => "upVotes",
            VoteField::Down => "downVotes",
        }
    }
}

#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Every recipe, in store order
    async fn find_all(&self) -> Result<Vec<Recipe>, BackendError>;

    /// The recipe with the given id, if any
    async fn find_by_id(&self, id: &str) -> Result<Option<Recipe>, BackendError>;

    /// Atomically add one to `field` and return the document *after* the
    /// update, or `None` when no document matches.
    async fn increment(&self, id: &str, field: VoteField) -> Result<Option<Recipe>, BackendError>;

    /// Insert a new document; fails if the id is already taken
    async fn insert(&self, recipe: &Recipe) -> Result<(), BackendError>;

    /// Insert the document, or replace the fields of the one with the same id
    async fn upsert(&self, recipe: &Recipe) -> Result<(), BackendError>;

    /// Whether the underlying client is initialized
    fn is_ready(&self) -> bool;
}
