//! Game session entity model and views.

use cognihire_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full game session row from the `game_sessions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GameSession {
    pub id: DbId,
    pub assessment_id: DbId,
    pub assessment_item_id: DbId,
    pub game_id: DbId,
    pub status: String,
    pub started_at: Timestamp,
    pub completed_at: Option<Timestamp>,
    pub metrics_json: Option<serde_json::Value>,
}

/// Session row joined through its parent assessment's ownership chain.
///
/// `candidate_id` and `tenant_id` are derived by the join on every fetch --
/// never stored redundantly on the session row -- so ownership checks
/// cannot go stale.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GameSessionView {
    pub id: DbId,
    pub assessment_id: DbId,
    pub assessment_item_id: DbId,
    pub game_id: DbId,
    pub status: String,
    pub started_at: Timestamp,
    pub completed_at: Option<Timestamp>,
    pub metrics_json: Option<serde_json::Value>,
    /// Owning candidate, from the parent assessment.
    pub candidate_id: DbId,
    /// Tenant, from the parent assessment.
    #[serde(skip_serializing)]
    pub tenant_id: DbId,
}

/// DTO for creating a new game session.
#[derive(Debug, Clone)]
pub struct CreateGameSession {
    pub assessment_id: DbId,
    pub assessment_item_id: DbId,
    pub game_id: DbId,
    pub metrics_json: Option<serde_json::Value>,
}

/// Filters for listing sessions; caller scoping is applied on top.
#[derive(Debug, Clone, Default)]
pub struct GameSessionFilter {
    pub assessment_id: Option<DbId>,
}
