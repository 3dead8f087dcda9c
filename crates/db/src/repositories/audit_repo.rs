//! Repository for the `audit_logs` table.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::audit::{AuditLogEntry, CreateAuditLogEntry};

/// Column list for SELECT/RETURNING queries.
const COLUMNS: &str = "id, tenant_id, actor_user_id, action, target_type, \
                       target_id, ip, user_agent, payload_json, created_at";

/// Provides append and query operations for the audit trail.
///
/// Entries are never updated or deleted from this core.
pub struct AuditLogRepo;

impl AuditLogRepo {
    /// Append one audit log entry.
    pub async fn append(
        pool: &PgPool,
        entry: &CreateAuditLogEntry,
    ) -> Result<AuditLogEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO audit_logs
                (id, tenant_id, actor_user_id, action, target_type, target_id,
                 ip, user_agent, payload_json)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AuditLogEntry>(&query)
            .bind(Uuid::now_v7())
            .bind(entry.tenant_id)
            .bind(entry.actor_user_id)
            .bind(&entry.action)
            .bind(&entry.target_type)
            .bind(entry.target_id)
            .bind(&entry.ip)
            .bind(&entry.user_agent)
            .bind(&entry.payload_json)
            .fetch_one(pool)
            .await
    }

    /// Most recent entries for one actor, newest first.
    pub async fn list_for_actor(
        pool: &PgPool,
        actor_user_id: uuid::Uuid,
        limit: i64,
    ) -> Result<Vec<AuditLogEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM audit_logs
             WHERE actor_user_id = $1
             ORDER BY created_at DESC
             LIMIT $2"
        );
        sqlx::query_as::<_, AuditLogEntry>(&query)
            .bind(actor_user_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
