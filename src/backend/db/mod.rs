//! Database Module
//!
//! - **`client`** - MongoDB client lifecycle with bounded connect retries
//! - **`store`** - The `RecipeStore` trait the repository is written against
//! - **`mongo`** - `RecipeStore` over the `recipes` collection
//! - **`memory`** - `RecipeStore` kept in process memory

pub mod client;
pub mod memory;
pub mod mongo;
pub mod store;

pub use client::StoreClient;
pub use memory::MemoryRecipeStore;
pub use mongo::MongoRecipeStore;
pub use store::{RecipeStore, VoteField};
