/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Layers
 *
 * - The `/api` routes are wrapped in a `SetResponseHeaderLayer` that sets
 *   the JSON content type on every response, errors included.
 * - `track_metrics` wraps the whole router, so `/metrics` and unknown paths
 *   are counted too.
 */

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, StatusCode},
    middleware,
    routing::get,
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::backend::middleware::metrics::{metrics_handler, track_metrics};
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Content type of every `/api` response
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Repository and metrics shared by every handler
pub fn create_router(app_state: AppState) -> Router<()> {
    let api = configure_api_routes(Router::new()).layer(SetResponseHeaderLayer::overriding(
        CONTENT_TYPE,
        HeaderValue::from_static(JSON_CONTENT_TYPE),
    ));

    Router::new()
        .merge(api)
        .route("/metrics", get(metrics_handler))
        .fallback(|| async { StatusCode::NOT_FOUND })
        .layer(middleware::from_fn_with_state(
            app_state.metrics.clone(),
            track_metrics,
        ))
        .with_state(app_state)
}
