//! Route Configuration Module
//!
//! - **`router`** - Main router creation, metrics layer and `/metrics`
//! - **`api_routes`** - The `/api` recipe endpoints
//!
//! # Route Types
//!
//! ## API Routes
//!
//! Every response under `/api` carries
//! `Content-Type: application/json; charset=UTF-8`, including empty error
//! responses.
//!
//! - `GET  /api/healthz`
//! - `GET  /api/recipes`, `POST /api/recipes`
//! - `GET  /api/recipes/{id}`
//! - `/api/recipes/{id}/up`, `/api/recipes/{id}/down` (any method)
//!
//! ## Metrics
//!
//! - `GET /metrics` - Prometheus text exposition

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

pub use router::create_router;
