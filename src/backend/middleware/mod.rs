//! Middleware Module
//!
//! - **`metrics`** - Prometheus request metrics and the `/metrics` handler
//!
//! The JSON content type of the `/api` routes is set with tower-http's
//! `SetResponseHeaderLayer` in `routes::router`.

pub mod metrics;

pub use metrics::{metrics_handler, track_metrics, HttpMetrics};
