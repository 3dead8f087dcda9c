//! Repository for candidate profiles and the admin candidate views.

use cognihire_core::types::DbId;
use sqlx::PgPool;

use crate::models::candidate_profile::{
    CandidateAdminView, CandidateProfile, CreateCandidateProfile,
};

/// Select list for [`CandidateAdminView`] rows.
const ADMIN_VIEW_COLUMNS: &str = "\
    u.id, u.username, u.email, p.full_name, p.job_role_id,
    r.title AS job_role_title, u.is_active, u.created_at, u.last_login_at,
    (SELECT COUNT(*) FROM assessments a
     WHERE a.candidate_id = u.id)::BIGINT AS assessment_count,
    (SELECT COUNT(*) FROM assessments a
     WHERE a.candidate_id = u.id AND a.status = 'COMPLETED')::BIGINT AS completed_assessments";

const ADMIN_VIEW_JOINS: &str = "\
    FROM users u
    LEFT JOIN candidate_profiles p ON p.user_id = u.id
    LEFT JOIN job_roles r ON r.id = p.job_role_id";

/// Provides profile persistence and tenant-scoped candidate views.
pub struct CandidateRepo;

impl CandidateRepo {
    /// Insert a candidate profile, returning the created row.
    pub async fn create_profile(
        pool: &PgPool,
        input: &CreateCandidateProfile,
    ) -> Result<CandidateProfile, sqlx::Error> {
        sqlx::query_as::<_, CandidateProfile>(
            "INSERT INTO candidate_profiles (user_id, full_name, job_role_id)
             VALUES ($1, $2, $3)
             RETURNING user_id, full_name, job_role_id, metadata_json",
        )
        .bind(input.user_id)
        .bind(&input.full_name)
        .bind(input.job_role_id)
        .fetch_one(pool)
        .await
    }

    /// Find the profile belonging to a user.
    pub async fn find_profile(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<CandidateProfile>, sqlx::Error> {
        sqlx::query_as::<_, CandidateProfile>(
            "SELECT user_id, full_name, job_role_id, metadata_json
             FROM candidate_profiles WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await
    }

    /// Tenant-scoped candidate listing with assessment counts, optionally
    /// filtered by active flag. Newest first.
    pub async fn list_for_tenant(
        pool: &PgPool,
        tenant_id: DbId,
        is_active: Option<bool>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<CandidateAdminView>, sqlx::Error> {
        let active_clause = if is_active.is_some() {
            "AND u.is_active = $2"
        } else {
            ""
        };
        let (limit_param, offset_param) = if is_active.is_some() { (3, 4) } else { (2, 3) };

        let query = format!(
            "SELECT {ADMIN_VIEW_COLUMNS}
             {ADMIN_VIEW_JOINS}
             WHERE u.tenant_id = $1 AND u.role = 'CANDIDATE' {active_clause}
             ORDER BY u.created_at DESC
             LIMIT ${limit_param} OFFSET ${offset_param}"
        );

        let mut q = sqlx::query_as::<_, CandidateAdminView>(&query).bind(tenant_id);
        if let Some(active) = is_active {
            q = q.bind(active);
        }
        q.bind(limit).bind(offset).fetch_all(pool).await
    }

    /// Fetch one candidate's admin view, scoped to the caller's tenant.
    pub async fn find_for_tenant(
        pool: &PgPool,
        tenant_id: DbId,
        candidate_id: DbId,
    ) -> Result<Option<CandidateAdminView>, sqlx::Error> {
        let query = format!(
            "SELECT {ADMIN_VIEW_COLUMNS}
             {ADMIN_VIEW_JOINS}
             WHERE u.tenant_id = $1 AND u.id = $2 AND u.role = 'CANDIDATE'"
        );
        sqlx::query_as::<_, CandidateAdminView>(&query)
            .bind(tenant_id)
            .bind(candidate_id)
            .fetch_optional(pool)
            .await
    }
}
