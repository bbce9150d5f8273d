//! Recipes Module
//!
//! - **`repository`** - `RecipeRepository`, the typed operations over a store
//! - **`handlers`** - Axum handlers for the `/api` routes

pub mod handlers;
pub mod repository;

pub use repository::RecipeRepository;
