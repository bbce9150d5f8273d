//! MongoDB-backed recipe store
//!
//! Documents live in the `recipes` collection and are addressed by their
//! `id` field (not `_id`). A unique index on `id` is created when the store
//! is opened.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::{IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

use crate::backend::db::client::StoreClient;
use crate::backend::db::store::{RecipeStore, VoteField};
use crate::backend::error::BackendError;
use crate::shared::Recipe;

#[derive(Debug, Clone)]
pub struct MongoRecipeStore {
    client: StoreClient,
    collection: Collection<Recipe>,
}

impl MongoRecipeStore {
    /// Open the recipe collection of a connected client
    ///
    /// Fails if the unique index on `id` can't be created, e.g. because the
    /// collection already holds duplicate ids or the user lacks the
    /// `createIndex` privilege. Without the index duplicate ids would be
    /// accepted.
    pub async fn open(client: StoreClient) -> Result<Self, BackendError> {
        let collection = client.recipes()?;
        let store = Self { client, collection };

        store.ensure_indexes().await?;
        Ok(store)
    }

    async fn ensure_indexes(&self) -> Result<(), BackendError> {
        let index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.collection.create_index(index).await.map_err(|e| {
            BackendError::store(format!("can't create unique index on recipes.id: {}", e))
        })?;
        Ok(())
    }
}

#[async_trait]
impl RecipeStore for MongoRecipeStore {
    async fn find_all(&self) -> Result<Vec<Recipe>, BackendError> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| BackendError::store(format!("can't get recipes: {}", e)))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| BackendError::store(format!("can't decode recipes: {}", e)))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Recipe>, BackendError> {
        self.collection
            .find_one(doc! { "id": id })
            .await
            .map_err(|e| BackendError::store(format!("can't get recipe {}: {}", id, e)))
    }

    async fn increment(&self, id: &str, field: VoteField) -> Result<Option<Recipe>, BackendError> {
        let mut counter = Document::new();
        counter.insert(field.field_name(), 1_i32);

        self.collection
            .find_one_and_update(doc! { "id": id }, doc! { "$inc": counter })
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| BackendError::store(format!("can't update recipe {}: {}", id, e)))
    }

    async fn insert(&self, recipe: &Recipe) -> Result<(), BackendError> {
        self.collection
            .insert_one(recipe)
            .await
            .map_err(|e| BackendError::store(format!("can't insert recipe: {}", e)))?;
        Ok(())
    }

    async fn upsert(&self, recipe: &Recipe) -> Result<(), BackendError> {
        let fields = mongodb::bson::to_document(recipe)?;
        self.collection
            .update_one(doc! { "id": recipe.id.as_str() }, doc! { "$set": fields })
            .upsert(true)
            .await
            .map_err(|e| BackendError::store(format!("can't upsert recipe {}: {}", recipe.id, e)))?;
        Ok(())
    }

    fn is_ready(&self) -> bool {
        self.client.is_connected()
    }
}
