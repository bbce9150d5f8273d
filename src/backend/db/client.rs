/**
 * Store Client
 *
 * Owns the MongoDB `Client` and its connect/disconnect lifecycle.
 *
 * # Connecting
 *
 * `StoreClient::connect` makes up to `RetryPolicy::max_attempts` attempts.
 * An attempt only counts as successful once a `ping` against the configured
 * database answers, since building a `Client` alone does not touch the
 * network. Between failed attempts the client sleeps for the policy's
 * backoff. When every attempt fails the last error is returned as a
 * `ConnectionError`.
 *
 * # Disconnecting
 *
 * `disconnect` shuts the client down once; later calls, and calls on a
 * client that never connected, do nothing.
 */

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use mongodb::{
    bson::doc,
    options::{ClientOptions, Credential},
    Client, Collection,
};

use crate::backend::error::BackendError;
use crate::backend::server::config::{RetryPolicy, StoreConfig, RECIPES_COLLECTION};
use crate::shared::Recipe;

/// Server selection timeout of a single attempt
const ATTEMPT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct StoreClient {
    client: Option<Client>,
    database: String,
    connected: Arc<AtomicBool>,
}

impl StoreClient {
    /// Connect to MongoDB, retrying according to `retry`
    pub async fn connect(config: &StoreConfig, retry: RetryPolicy) -> Result<Self, BackendError> {
        let client = with_retries(retry, |attempt| async move {
            tracing::debug!("connecting to {} (attempt {})", config.uri(), attempt);
            let client = build_client(config).await?;
            let ping = client
                .database(&config.database)
                .run_command(doc! { "ping": 1 })
                .await;
            if let Err(e) = ping {
                // Stop this attempt's monitors before the next one starts.
                client.shutdown().await;
                return Err(e.into());
            }
            Ok(client)
        })
        .await?;

        tracing::info!("connected to mongodb at {}", config.uri());
        Ok(Self {
            client: Some(client),
            database: config.database.clone(),
            connected: Arc::new(AtomicBool::new(true)),
        })
    }

    /// A client that was never initialized
    pub fn disconnected(database: impl Into<String>) -> Self {
        Self {
            client: None,
            database: database.into(),
            connected: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.client.is_some() && self.connected.load(Ordering::SeqCst)
    }

    /// Handle to the `recipes` collection
    pub fn recipes(&self) -> Result<Collection<Recipe>, BackendError> {
        let client = self
            .client
            .as_ref()
            .ok_or_else(|| BackendError::store("mongodb client is not initialized"))?;
        Ok(client
            .database(&self.database)
            .collection::<Recipe>(RECIPES_COLLECTION))
    }

    /// Release the underlying session
    pub async fn disconnect(&self) {
        let Some(client) = &self.client else {
            return;
        };
        if self.connected.swap(false, Ordering::SeqCst) {
            client.clone().shutdown().await;
            tracing::info!("disconnected from mongodb");
        }
    }
}

async fn build_client(config: &StoreConfig) -> Result<Client, BackendError> {
    let mut options = ClientOptions::parse(config.uri()).await?;
    options.server_selection_timeout = Some(ATTEMPT_TIMEOUT);

    if let Some(username) = &config.username {
        options.credential = Some(
            Credential::builder()
                .username(username.clone())
                .password(config.password.clone())
                .source(config.database.clone())
                .build(),
        );
    }

    Ok(Client::with_options(options)?)
}

/// Run `attempt` until it succeeds or the policy runs out of attempts
///
/// The closure receives the 1-based attempt number.
pub async fn with_retries<T, F, Fut>(policy: RetryPolicy, mut attempt: F) -> Result<T, BackendError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, BackendError>>,
{
    let mut last_error = String::from("no attempt was made");

    for n in 1..=policy.max_attempts {
        match attempt(n).await {
            Ok(value) => return Ok(value),
            Err(e) => {
                tracing::warn!("failed to connect to mongo #{}: {}", n, e);
                last_error = e.to_string();
                if n < policy.max_attempts {
                    tokio::time::sleep(policy.backoff(n)).await;
                }
            }
        }
    }

    Err(BackendError::connection(policy.max_attempts, last_error))
}
