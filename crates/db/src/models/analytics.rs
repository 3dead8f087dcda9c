//! Aggregate counts for the admin analytics overview.

use serde::Serialize;
use sqlx::FromRow;

/// Tenant-scoped dashboard counts.
///
/// Also serves as the fallback payload shape when the store is unreachable
/// (the overview endpoint fails open rather than surfacing a 5xx).
#[derive(Debug, Clone, Copy, FromRow, Serialize)]
pub struct OverviewCounts {
    pub total_candidates: i64,
    pub active_candidates: i64,
    pub total_assessments: i64,
    pub completed_assessments: i64,
    pub total_job_roles: i64,
}

/// Last-known/static snapshot returned when the data source errors.
pub const FALLBACK_OVERVIEW: OverviewCounts = OverviewCounts {
    total_candidates: 0,
    active_candidates: 0,
    total_assessments: 0,
    completed_assessments: 0,
    total_job_roles: 0,
};
