//! Assessment item entity model.

use cognihire_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// One scored unit within an assessment, backed by one game.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AssessmentItem {
    pub id: DbId,
    pub assessment_id: DbId,
    pub game_id: DbId,
    pub order_index: i32,
    pub timer_seconds: Option<i32>,
    pub status: String,
    pub score: Option<i32>,
    pub metrics_json: Option<serde_json::Value>,
    pub config_snapshot: Option<serde_json::Value>,
}

/// Outcome of the guarded item submit transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted,
    NotFound,
    NotOwner,
    /// The item was already SUBMITTED, or the parent assessment is not
    /// IN_PROGRESS; carries the observed status that blocked the submit.
    WrongStatus(String),
}
