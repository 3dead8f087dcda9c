//! Audit log entity model and DTO.
//!
//! Audit logs are append-only (no update DTO, no `updated_at`). Writes are
//! best-effort side effects of state transitions and must never fail the
//! transition they accompany.

use cognihire_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A single audit log entry. Immutable once created.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AuditLogEntry {
    pub id: DbId,
    pub tenant_id: Option<DbId>,
    pub actor_user_id: Option<DbId>,
    pub action: String,
    pub target_type: Option<String>,
    pub target_id: Option<DbId>,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub payload_json: Option<serde_json::Value>,
    pub created_at: Timestamp,
}

/// DTO for appending a new audit log entry.
#[derive(Debug, Clone)]
pub struct CreateAuditLogEntry {
    pub tenant_id: Option<DbId>,
    pub actor_user_id: Option<DbId>,
    pub action: String,
    pub target_type: Option<String>,
    pub target_id: Option<DbId>,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub payload_json: Option<serde_json::Value>,
}
