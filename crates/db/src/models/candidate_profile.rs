//! Candidate profile entity model (1:1 with a CANDIDATE user) and the
//! admin-facing candidate view.

use cognihire_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Profile row for a CANDIDATE user.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CandidateProfile {
    pub user_id: DbId,
    pub full_name: Option<String>,
    pub job_role_id: Option<DbId>,
    pub metadata_json: Option<serde_json::Value>,
}

/// DTO for creating a candidate profile alongside registration.
#[derive(Debug, Clone)]
pub struct CreateCandidateProfile {
    pub user_id: DbId,
    pub full_name: Option<String>,
    pub job_role_id: Option<DbId>,
}

/// Candidate row joined with profile, job-role title, and assessment counts
/// for the admin candidate listing.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CandidateAdminView {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
    pub job_role_id: Option<DbId>,
    pub job_role_title: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub last_login_at: Option<Timestamp>,
    pub assessment_count: i64,
    pub completed_assessments: i64,
}
