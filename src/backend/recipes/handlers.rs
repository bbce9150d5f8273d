//! Recipe HTTP Handlers
//!
//! Each handler extracts the repository from application state, calls one
//! repository operation and serializes the result. Errors are returned as
//! `BackendError`, which turns into a bare status code.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use super::repository::RecipeRepository;
use crate::backend::error::BackendError;
use crate::shared::{NewRecipe, Recipe};

/// Reject ids that are empty or only whitespace
fn require_id(id: &str) -> Result<&str, BackendError> {
    if id.trim().is_empty() {
        return Err(BackendError::handler(
            StatusCode::BAD_REQUEST,
            "recipe id is empty",
        ));
    }
    Ok(id)
}

/// `GET /api/healthz`
pub async fn healthcheck(State(repository): State<RecipeRepository>) -> StatusCode {
    if repository.is_ready() {
        StatusCode::OK
    } else {
        tracing::warn!("health check failed: store client is not initialized");
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// `GET /api/recipes`
pub async fn list_recipes(
    State(repository): State<RecipeRepository>,
) -> Result<Json<Vec<Recipe>>, BackendError> {
    let recipes = repository.list_recipes().await?;
    tracing::debug!("listing {} recipes", recipes.len());
    Ok(Json(recipes))
}

/// `POST /api/recipes`
pub async fn add_recipe(
    State(repository): State<RecipeRepository>,
    body: Result<Json<NewRecipe>, JsonRejection>,
) -> Result<Json<Recipe>, BackendError> {
    let Json(new_recipe) = body.map_err(|rejection| {
        BackendError::handler(StatusCode::BAD_REQUEST, rejection.body_text())
    })?;

    let recipe = repository.add_recipe(new_recipe).await?;
    tracing::info!("added recipe {} ({})", recipe.id, recipe.title);
    Ok(Json(recipe))
}

/// `GET /api/recipes/{id}`
pub async fn get_recipe(
    State(repository): State<RecipeRepository>,
    Path(id): Path<String>,
) -> Result<Json<Recipe>, BackendError> {
    let id = require_id(&id)?;
    Ok(Json(repository.get_recipe(id).await?))
}

/// `* /api/recipes/{id}/up`
pub async fn up_vote(
    State(repository): State<RecipeRepository>,
    Path(id): Path<String>,
) -> Result<Json<Recipe>, BackendError> {
    let id = require_id(&id)?;
    let recipe = repository.up_vote(id).await?;
    tracing::debug!("recipe {} now has {} up votes", recipe.id, recipe.up_votes);
    Ok(Json(recipe))
}

/// `* /api/recipes/{id}/down`
///
/// Down votes are counted by `RecipeRepository::down_vote` but are not
/// exposed over HTTP yet.
pub async fn down_vote(Path(id): Path<String>) -> BackendError {
    BackendError::handler(
        StatusCode::NOT_IMPLEMENTED,
        format!("down votes are not available (recipe {})", id),
    )
}
