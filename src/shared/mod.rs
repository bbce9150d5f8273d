//! Shared Module
//!
//! Types that are serialized over HTTP and stored in MongoDB. They carry no
//! server dependencies so a client can reuse them as-is.

/// Recipe document and request body
pub mod recipe;

/// Shared error types
pub mod error;

pub use error::SharedError;
pub use recipe::{NewRecipe, Recipe};
