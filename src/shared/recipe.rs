/**
 * Recipe Data Structure
 *
 * This module defines the Recipe document stored in the `recipes` collection
 * and the NewRecipe body accepted when a client adds a recipe.
 *
 * Field names are camelCase on the wire and in MongoDB, so the same struct
 * is used for JSON responses, BSON documents and the bundled load file.
 */
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;

/// A single recipe with its vote counters
///
/// # Fields
/// * `id` - Externally visible unique identifier
/// * `title` - Display title, used for ordering listings
/// * `image` - URL of the recipe picture
/// * `up_votes` - Number of up votes (`upVotes` on the wire)
/// * `down_votes` - Number of down votes (`downVotes` on the wire)
///
/// # Example
/// ```rust
/// use recipes::shared::Recipe;
///
/// let recipe = Recipe::new("tacos", "Tacos", "http://x/tacos.png");
/// assert_eq!(recipe.up_votes, 0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub image: String,
    #[serde(default)]
    pub up_votes: i64,
    #[serde(default)]
    pub down_votes: i64,
}

impl Recipe {
    /// Create a recipe with both counters at zero
    pub fn new(id: impl Into<String>, title: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image: image.into(),
            up_votes: 0,
            down_votes: 0,
        }
    }
}

/// Body of `POST /api/recipes`
///
/// `title` and `image` default to empty strings when missing so that the
/// request fails validation (400) instead of deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewRecipe {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: String,
}

impl NewRecipe {
    pub fn new(title: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            image: image.into(),
        }
    }

    /// Check that the fields required on creation are present
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` naming the first empty field.
    pub fn validate(&self) -> Result<(), SharedError> {
        if self.title.is_empty() {
            return Err(SharedError::validation("title", "title must not be empty"));
        }
        if self.image.is_empty() {
            return Err(SharedError::validation("image", "image must not be empty"));
        }
        Ok(())
    }

    /// Turn the request into a storable recipe
    ///
    /// A missing or empty `id` is replaced by a random UUID v4. Counters
    /// always start at zero.
    pub fn into_recipe(self) -> Recipe {
        let id = match self.id {
            Some(id) if !id.is_empty() => id,
            _ => Uuid::new_v4().to_string(),
        };
        Recipe::new(id, self.title, self.image)
    }
}
