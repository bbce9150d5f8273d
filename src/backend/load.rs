/**
 * Recipes Bulk Loader
 *
 * Upserts the recipes bundled in `data/recipes.json` into the MongoDB
 * `recipes` collection. Running it twice leaves the collection unchanged.
 * Failures of individual recipes are collected and reported together; the
 * process then exits non-zero.
 */

#[cfg(feature = "server")]
const BUNDLED_RECIPES: &str = include_str!("../../data/recipes.json");

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use recipes::backend::server::{init_tracing, open_repository, ServerConfig, StoreBackend};
    use recipes::shared::Recipe;

    dotenv::dotenv().ok();
    init_tracing();

    // The loader always targets MongoDB, whatever RECIPES_STORE says.
    let config = ServerConfig {
        backend: StoreBackend::MongoDb,
        ..ServerConfig::from_env()?
    };

    let recipes: Vec<Recipe> = serde_json::from_str(BUNDLED_RECIPES)?;
    tracing::info!("loading {} recipes", recipes.len());

    let (repository, client) = open_repository(&config).await?;
    let loaded = repository.bulk_upsert(&recipes).await;

    if let Some(client) = client {
        client.disconnect().await;
    }

    match loaded {
        Ok(count) => {
            tracing::info!("loaded {} recipes", count);
            Ok(())
        }
        Err(e) => {
            tracing::error!("{}", e);
            Err(e.into())
        }
    }
}

#[cfg(not(feature = "server"))]
fn main() {
    eprintln!("recipes-load requires the 'server' feature to be enabled.");
    std::process::exit(1);
}
