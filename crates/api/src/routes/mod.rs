pub mod admin;
pub mod assessment;
pub mod auth;
pub mod game_session;
pub mod games;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                               login (public)
/// /auth/register                            candidate self-registration (public)
/// /auth/me                                  own account + profile
/// /auth/change-password                     change own password
///
/// /assessments/current                      candidate's open assessment + items
/// /assessments/{id}/start                   NOT_STARTED -> IN_PROGRESS
/// /assessments/{id}/items/{item_id}/submit  record item score (SUBMITTED)
/// /assessments/{id}/complete                IN_PROGRESS -> COMPLETED
///
/// /game-sessions                            list (scoped), create (candidate)
/// /game-sessions/{id}                       get; POST dispatches actions
///
/// /admin/analytics/overview                 dashboard counts (fails open)
/// /admin/candidates                         list, create (admin only)
/// /admin/candidates/{id}                    get
/// /admin/assessments                        tenant assessment listing
///
/// /games                                    game catalog (any authed user)
/// /games/{id}                               game detail
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (login, register, profile, password).
        .nest("/auth", auth::router())
        // Candidate-facing assessment lifecycle.
        .nest("/assessments", assessment::router())
        // Game session creation, actions, and scoped listing.
        .nest("/game-sessions", game_session::router())
        // Admin: candidate management, assessment oversight, analytics.
        .nest("/admin", admin::router())
        // Read-only game catalog.
        .nest("/games", games::router())
}
