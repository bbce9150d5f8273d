//! MongoDB store integration tests
//!
//! These tests need a running MongoDB and only run when `MONGODB_TEST_HOST`
//! is set, e.g.
//!
//! ```text
//! docker run -d -p 27017:27017 mongo:7
//! MONGODB_TEST_HOST=localhost cargo test --test mongo_store_test
//! ```
//!
//! Each test works in its own database, which is dropped afterwards. They
//! are serialized to keep the server load predictable.

mod common;

use std::sync::Arc;

use pretty_assertions::assert_eq;
use recipes::backend::db::{MongoRecipeStore, StoreClient};
use recipes::backend::server::{RetryPolicy, StoreConfig};
use recipes::backend::{BackendError, RecipeRepository};
use recipes::shared::{NewRecipe, Recipe};
use serial_test::serial;

use common::sample_recipes;

/// Client on a database with an empty `recipes` collection, or `None` when
/// no server is configured
async fn test_client(database: &str) -> Option<StoreClient> {
    let host = std::env::var("MONGODB_TEST_HOST").ok()?;
    let config = StoreConfig {
        host,
        database: database.to_string(),
        ..StoreConfig::default()
    };

    let client = StoreClient::connect(&config, RetryPolicy::default())
        .await
        .expect("Failed to connect to test MongoDB");
    client
        .recipes()
        .expect("collection handle")
        .drop()
        .await
        .expect("Failed to reset collection");
    Some(client)
}

/// Repository over a fresh database, or `None` when no server is configured
async fn test_repository(database: &str) -> Option<(RecipeRepository, StoreClient)> {
    let client = test_client(database).await?;
    let store = MongoRecipeStore::open(client.clone())
        .await
        .expect("Failed to open store");
    Some((RecipeRepository::new(Arc::new(store)), client))
}

async fn teardown(client: StoreClient) {
    client.recipes().unwrap().drop().await.unwrap();
    client.disconnect().await;
}

#[tokio::test]
#[serial]
async fn test_mongo_bulk_upsert_and_list() {
    let Some((repository, client)) = test_repository("recipes_test_bulk").await else {
        return;
    };

    assert_eq!(repository.bulk_upsert(&sample_recipes()).await.unwrap(), 3);
    assert_eq!(repository.bulk_upsert(&sample_recipes()).await.unwrap(), 3);

    let titles: Vec<String> = repository
        .list_recipes()
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.title)
        .collect();
    assert_eq!(titles, vec!["Bibimbap", "Pho", "Shoyu Ramen"]);

    teardown(client).await;
}

#[tokio::test]
#[serial]
async fn test_mongo_votes_and_not_found() {
    let Some((repository, client)) = test_repository("recipes_test_votes").await else {
        return;
    };
    repository.bulk_upsert(&sample_recipes()).await.unwrap();

    repository.up_vote("r-pho").await.unwrap();
    let voted = repository.up_vote("r-pho").await.unwrap();
    assert_eq!(voted.up_votes, 2);
    assert_eq!(repository.get_recipe("r-pho").await.unwrap(), voted);

    assert!(matches!(
        repository.get_recipe("doesnotexist").await,
        Err(BackendError::NotFound { .. })
    ));
    assert!(matches!(
        repository.up_vote("doesnotexist").await,
        Err(BackendError::NotFound { .. })
    ));

    teardown(client).await;
}

#[tokio::test]
#[serial]
async fn test_mongo_add_recipe_round_trips_counters() {
    let Some((repository, client)) = test_repository("recipes_test_add").await else {
        return;
    };

    let added = repository
        .add_recipe(NewRecipe::new("Tacos", "http://x/tacos.png"))
        .await
        .unwrap();
    assert_eq!(added.up_votes, 0);
    assert_eq!(added.down_votes, 0);

    let fetched: Recipe = repository.get_recipe(&added.id).await.unwrap();
    assert_eq!(fetched, added);

    // Duplicate ids are rejected by the unique index
    let duplicate = NewRecipe {
        id: Some(added.id.clone()),
        ..NewRecipe::new("Tacos again", "http://x/tacos.png")
    };
    assert!(matches!(
        repository.add_recipe(duplicate).await,
        Err(BackendError::StoreError { .. })
    ));

    teardown(client).await;
}

#[tokio::test]
#[serial]
async fn test_mongo_open_fails_without_unique_index() {
    let Some(client) = test_client("recipes_test_index").await else {
        return;
    };

    // Duplicate ids written before the index exists block its creation
    let recipe = Recipe::new("dup", "Tacos", "http://x/tacos.png");
    client
        .recipes()
        .unwrap()
        .insert_many([recipe.clone(), recipe])
        .await
        .unwrap();

    assert!(matches!(
        MongoRecipeStore::open(client.clone()).await,
        Err(BackendError::StoreError { .. })
    ));

    teardown(client).await;
}
