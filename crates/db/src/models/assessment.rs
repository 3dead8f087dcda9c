//! Assessment entity model and views.

use cognihire_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full assessment row from the `assessments` table.
///
/// `status` is one of the TEXT values defined by
/// `cognihire_core::lifecycle::AssessmentStatus`; the CHECK constraint and
/// the guarded transition queries keep the two in sync.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Assessment {
    pub id: DbId,
    pub tenant_id: DbId,
    pub candidate_id: DbId,
    pub job_role_id: DbId,
    pub status: String,
    pub started_at: Option<Timestamp>,
    pub completed_at: Option<Timestamp>,
    pub total_score: Option<i32>,
    pub created_at: Timestamp,
}

/// Admin-facing assessment row joined with candidate name and job-role title.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AssessmentAdminView {
    pub id: DbId,
    pub candidate_id: DbId,
    pub job_role_id: DbId,
    pub status: String,
    pub started_at: Option<Timestamp>,
    pub completed_at: Option<Timestamp>,
    pub total_score: Option<i32>,
    pub candidate_name: Option<String>,
    pub job_role_title: String,
}

/// Outcome of the transactional complete operation.
///
/// Returned by `AssessmentRepo::complete` so the handler can map each case
/// to the right error without re-reading state outside the transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompleteOutcome {
    /// Transition committed; carries the computed total score.
    Completed { total_score: i32 },
    /// No assessment row with that id.
    NotFound,
    /// The assessment belongs to a different candidate.
    NotOwner,
    /// The assessment was not IN_PROGRESS; carries the observed status.
    WrongStatus(String),
}

/// Outcome of the guarded start transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartOutcome {
    Started(Assessment),
    NotFound,
    NotOwner,
    WrongStatus(String),
}
