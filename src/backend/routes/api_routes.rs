/**
 * API Routes
 *
 * - `GET  /api/healthz` - 200 when the store client is initialized
 * - `GET  /api/recipes` - every recipe, ordered by title
 * - `POST /api/recipes` - add a recipe
 * - `GET  /api/recipes/{id}` - one recipe
 * - `*    /api/recipes/{id}/up` - up vote
 * - `*    /api/recipes/{id}/down` - 501 Not Implemented
 */

use axum::{
    routing::{any, get},
    Router,
};

use crate::backend::recipes::handlers::{
    add_recipe, down_vote, get_recipe, healthcheck, list_recipes, up_vote,
};
use crate::backend::server::state::AppState;

/// Add the `/api` routes to `router`
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/healthz", get(healthcheck))
        .route("/api/recipes", get(list_recipes).post(add_recipe))
        .route("/api/recipes/{id}", get(get_recipe))
        .route("/api/recipes/{id}/up", any(up_vote))
        .route("/api/recipes/{id}/down", any(down_vote))
}
