//! Repository for the `job_roles` table.
//!
//! Read-only from this core: job roles are provisioned externally.

use cognihire_core::types::DbId;
use sqlx::PgPool;

use crate::models::job_role::JobRole;

const COLUMNS: &str = "id, tenant_id, title, description, traits_json, config_json, created_at";

/// Provides lookups for job roles.
pub struct JobRoleRepo;

impl JobRoleRepo {
    /// Find a job role by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<JobRole>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM job_roles WHERE id = $1");
        sqlx::query_as::<_, JobRole>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Resolve a job role's title (for audit payload snapshots).
    pub async fn resolve_title(pool: &PgPool, id: DbId) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT title FROM job_roles WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
