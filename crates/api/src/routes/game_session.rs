//! Route definitions for the `/game-sessions` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::game_session;
use crate::state::AppState;

/// Routes mounted at `/game-sessions`.
///
/// ```text
/// GET  /       -> list (scoped to tenant for admins, self for candidates)
/// POST /       -> create (candidate only)
/// GET  /{id}   -> get
/// POST /{id}   -> action (candidate only; "complete")
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(game_session::list).post(game_session::create))
        .route("/{id}", get(game_session::get).post(game_session::action))
}
