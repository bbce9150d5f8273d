/**
 * Application State
 *
 * `AppState` is the single state container handed to the router. It owns
 * the recipe repository and the metrics registry; there is no global store
 * handle.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract only what they use:
 *
 * ```rust
 * use axum::extract::State;
 * use recipes::backend::recipes::RecipeRepository;
 *
 * async fn handler(State(repository): State<RecipeRepository>) {
 *     let _ = repository.is_ready();
 * }
 * ```
 */

use axum::extract::FromRef;

use crate::backend::middleware::metrics::HttpMetrics;
use crate::backend::recipes::RecipeRepository;

#[derive(Clone)]
pub struct AppState {
    /// Typed access to the recipe collection
    pub repository: RecipeRepository,

    /// Request metrics, rendered at `/metrics`
    pub metrics: HttpMetrics,
}

impl AppState {
    pub fn new(repository: RecipeRepository, metrics: HttpMetrics) -> Self {
        Self {
            repository,
            metrics,
        }
    }
}

impl FromRef<AppState> for RecipeRepository {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.repository.clone()
    }
}

impl FromRef<AppState> for HttpMetrics {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.metrics.clone()
    }
}
