//! Backend Module
//!
//! This module contains all server-side code for the recipes service. It is
//! only compiled when the `server` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state and app creation
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`recipes`** - Recipe handlers and the recipe repository
//! - **`db`** - MongoDB client lifecycle and the `RecipeStore` implementations
//! - **`middleware`** - Request metrics
//! - **`error`** - Backend error type and its HTTP conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - recipes-api binary
//! ├── load.rs         - recipes-load binary
//! ├── server/         - Config, state, initialization
//! ├── routes/         - Route configuration
//! ├── recipes/        - Handlers and repository
//! ├── db/             - Store client and stores
//! ├── middleware/     - Prometheus metrics
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` owns the `RecipeRepository` and the `HttpMetrics` registry.
//! Both are cheap to clone (`Arc` inside) and are handed to handlers through
//! axum's `State` extractor. There is no process-wide mutable state.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Recipe handlers and repository
pub mod recipes;

/// Store client and recipe stores
pub mod db;

/// Request middleware
pub mod middleware;

/// Backend error types
pub mod error;

pub use error::BackendError;
pub use recipes::RecipeRepository;
pub use server::create_app;
