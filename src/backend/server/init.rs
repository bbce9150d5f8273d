/**
 * Server Initialization
 *
 * This module wires the configured store, the repository and the metrics
 * registry into an Axum router.
 *
 * # Initialization Process
 *
 * 1. `init_tracing` installs the `tracing` subscriber
 * 2. `open_repository` connects the configured store
 * 3. `create_app` builds the metrics registry, the `AppState` and the router
 *
 * The binary keeps the returned `StoreClient` so it can disconnect once the
 * server stops.
 */

use std::sync::Arc;

use axum::Router;
use tracing_subscriber::EnvFilter;

use crate::backend::db::{MemoryRecipeStore, MongoRecipeStore, StoreClient};
use crate::backend::error::BackendError;
use crate::backend::middleware::metrics::HttpMetrics;
use crate::backend::recipes::RecipeRepository;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{ServerConfig, StoreBackend};
use crate::backend::server::state::AppState;

/// Install the global `tracing` subscriber
///
/// The filter is read from `RUST_LOG` and defaults to `info`.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // A second call (e.g. from a test) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .try_init();
}

/// Open the store selected by `config`
///
/// For MongoDB the whole retry sequence is bounded by
/// `config.connect_timeout`. The client is returned alongside the repository
/// so the caller can disconnect on shutdown; the in-memory store has none.
pub async fn open_repository(
    config: &ServerConfig,
) -> Result<(RecipeRepository, Option<StoreClient>), BackendError> {
    match config.backend {
        StoreBackend::Memory => {
            tracing::warn!("using the in-memory recipe store, data is lost on exit");
            let store = Arc::new(MemoryRecipeStore::new());
            Ok((RecipeRepository::new(store), None))
        }
        StoreBackend::MongoDb => {
            let client = tokio::time::timeout(
                config.connect_timeout,
                StoreClient::connect(&config.store, config.retry),
            )
            .await
            .map_err(|_| {
                BackendError::connection(
                    config.retry.max_attempts,
                    format!("timed out after {:?}", config.connect_timeout),
                )
            })??;

            let store = MongoRecipeStore::open(client.clone()).await?;
            Ok((RecipeRepository::new(Arc::new(store)), Some(client)))
        }
    }
}

/// Create and configure the Axum application around `repository`
///
/// # Errors
///
/// Fails only if the Prometheus instruments cannot be registered.
pub fn create_app(repository: RecipeRepository) -> Result<Router, BackendError> {
    let metrics = HttpMetrics::new()?;
    let app_state = AppState::new(repository, metrics);

    tracing::debug!("router configured");
    Ok(create_router(app_state))
}
