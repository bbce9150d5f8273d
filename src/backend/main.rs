/**
 * Recipes API Entry Point
 *
 * Loads the configuration, connects the recipe store and serves the HTTP
 * API until SIGINT or SIGTERM. In-flight requests are not drained; the
 * store client is disconnected once the listener stops.
 */

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use recipes::backend::server::{create_app, init_tracing, open_repository, ServerConfig};

    // Load environment variables from .env file if present
    dotenv::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env()?;
    tracing::info!("starting recipes-api with {:?} store", config.backend);

    let (repository, client) = open_repository(&config).await?;
    let app = create_app(repository)?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", addr);

    let served = tokio::select! {
        result = axum::serve(listener, app) => result,
        _ = shutdown_signal() => {
            tracing::info!("shutdown signal received");
            Ok(())
        }
    };

    if let Some(client) = client {
        client.disconnect().await;
    }

    served?;
    Ok(())
}

#[cfg(feature = "server")]
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(not(feature = "server"))]
fn main() {
    eprintln!("recipes-api requires the 'server' feature to be enabled.");
    std::process::exit(1);
}
