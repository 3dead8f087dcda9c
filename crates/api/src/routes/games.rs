//! Route definitions for the `/games` catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::games;
use crate::state::AppState;

/// Routes mounted at `/games` (read-only, any authenticated user).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(games::list))
        .route("/{id}", get(games::get))
}
