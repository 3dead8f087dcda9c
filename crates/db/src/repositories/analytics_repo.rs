//! Read-only aggregation for the admin analytics overview.

use cognihire_core::types::DbId;
use sqlx::PgPool;

use crate::models::analytics::OverviewCounts;

/// Provides best-effort dashboard aggregates.
pub struct AnalyticsRepo;

impl AnalyticsRepo {
    /// Tenant-scoped overview counts in a single round trip.
    pub async fn overview(pool: &PgPool, tenant_id: DbId) -> Result<OverviewCounts, sqlx::Error> {
        sqlx::query_as::<_, OverviewCounts>(
            "SELECT
                (SELECT COUNT(*) FROM users
                 WHERE tenant_id = $1 AND role = 'CANDIDATE')::BIGINT AS total_candidates,
                (SELECT COUNT(*) FROM users
                 WHERE tenant_id = $1 AND role = 'CANDIDATE' AND is_active)::BIGINT AS active_candidates,
                (SELECT COUNT(*) FROM assessments
                 WHERE tenant_id = $1)::BIGINT AS total_assessments,
                (SELECT COUNT(*) FROM assessments
                 WHERE tenant_id = $1 AND status = 'COMPLETED')::BIGINT AS completed_assessments,
                (SELECT COUNT(*) FROM job_roles
                 WHERE tenant_id = $1)::BIGINT AS total_job_roles",
        )
        .bind(tenant_id)
        .fetch_one(pool)
        .await
    }
}
