//! Route definitions for the `/admin` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`. All admin-only and tenant-scoped.
///
/// ```text
/// GET  /analytics/overview  -> analytics_overview (fails open)
/// GET  /candidates          -> list_candidates
/// POST /candidates          -> create_candidate
/// GET  /candidates/{id}     -> get_candidate
/// GET  /assessments         -> list_assessments
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/analytics/overview", get(admin::analytics_overview))
        .route(
            "/candidates",
            get(admin::list_candidates).post(admin::create_candidate),
        )
        .route("/candidates/{id}", get(admin::get_candidate))
        .route("/assessments", get(admin::list_assessments))
}
