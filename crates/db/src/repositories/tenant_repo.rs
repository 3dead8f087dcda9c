//! Repository for the `tenants` table.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::tenant::Tenant;

const COLUMNS: &str = "id, name, subdomain, created_at";

/// Provides lookups for tenants.
pub struct TenantRepo;

impl TenantRepo {
    /// The default tenant new registrations are placed under.
    ///
    /// Creates it on first use if no tenant exists yet.
    pub async fn find_or_create_default(pool: &PgPool) -> Result<Tenant, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tenants ORDER BY created_at ASC LIMIT 1");
        if let Some(tenant) = sqlx::query_as::<_, Tenant>(&query)
            .fetch_optional(pool)
            .await?
        {
            return Ok(tenant);
        }

        let insert = format!(
            "INSERT INTO tenants (id, name, subdomain)
             VALUES ($1, 'Default Tenant', 'default')
             ON CONFLICT (subdomain) DO UPDATE SET name = EXCLUDED.name
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tenant>(&insert)
            .bind(Uuid::now_v7())
            .fetch_one(pool)
            .await
    }
}
