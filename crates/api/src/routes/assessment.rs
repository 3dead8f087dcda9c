//! Route definitions for the `/assessments` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::assessment;
use crate::state::AppState;

/// Routes mounted at `/assessments`. All candidate-only.
///
/// ```text
/// GET  /current                        -> get_current
/// POST /{id}/start                     -> start
/// POST /{id}/items/{item_id}/submit    -> submit_item
/// POST /{id}/complete                  -> complete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/current", get(assessment::get_current))
        .route("/{id}/start", post(assessment::start))
        .route("/{id}/items/{item_id}/submit", post(assessment::submit_item))
        .route("/{id}/complete", post(assessment::complete))
}
