//! Recipes - Main Library
//!
//! Recipes is a small HTTP service that serves a collection of recipes stored
//! in MongoDB, lets clients add new ones and vote on the existing ones.
//!
//! # Module Structure
//!
//! The library is organized into two main modules:
//!
//! - **`shared`** - Types shared between the server and its clients
//!   - The `Recipe` document and the `NewRecipe` request body
//!   - Validation errors
//!
//! - **`backend`** - Server-side code (only compiled with the `server` feature)
//!   - Axum HTTP server, routes and handlers
//!   - MongoDB store client and the recipe repository
//!   - Prometheus request metrics
//!
//! # Feature Flags
//!
//! - **`server`** (default) - Enables the backend modules and both binaries
//!
//! # Usage
//!
//! ```rust,no_run
//! use recipes::backend::db::MemoryRecipeStore;
//! use recipes::backend::recipes::RecipeRepository;
//! use recipes::backend::server::init::create_app;
//! use std::sync::Arc;
//!
//! # async fn example() {
//! let repository = RecipeRepository::new(Arc::new(MemoryRecipeStore::new()));
//! let app = create_app(repository).unwrap();
//! // Serve `app` with axum::serve
//! # }
//! ```
//!
//! # Binaries
//!
//! - `recipes-api` - the HTTP server (port 8080)
//! - `recipes-load` - upserts the bundled recipe set into the collection

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "server")]
pub mod backend;
