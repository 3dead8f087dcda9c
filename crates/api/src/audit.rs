//! Best-effort audit trail writes.
//!
//! Audit entries accompany state transitions but are logically decoupled
//! from them: a failed append is logged and swallowed, never rolled into
//! the primary operation's result.

use cognihire_db::models::audit::CreateAuditLogEntry;
use cognihire_db::DbPool;

use crate::middleware::auth::AuthUser;

/// Action tag for a successful login.
pub const ACTION_LOGIN: &str = "LOGIN";
/// Action tag for a new registration.
pub const ACTION_REGISTER: &str = "REGISTER";
/// Action tag for a password change.
pub const ACTION_CHANGE_PASSWORD: &str = "CHANGE_PASSWORD";
/// Action tag for the NOT_STARTED -> IN_PROGRESS transition.
pub const ACTION_ASSESSMENT_STARTED: &str = "ASSESSMENT_STARTED";
/// Action tag for the IN_PROGRESS -> COMPLETED transition.
pub const ACTION_ASSESSMENT_COMPLETED: &str = "ASSESSMENT_COMPLETED";
/// Action tag for an item submission.
pub const ACTION_ITEM_SUBMITTED: &str = "ITEM_SUBMITTED";
/// Action tag for game session creation.
pub const ACTION_SESSION_CREATED: &str = "GAME_SESSION_CREATED";
/// Action tag for game session completion.
pub const ACTION_SESSION_COMPLETED: &str = "GAME_SESSION_COMPLETED";
/// Action tag for admin candidate creation.
pub const ACTION_CREATE_CANDIDATE: &str = "CREATE_CANDIDATE";

/// Append an audit entry for an authenticated actor. Never fails the caller.
pub async fn record(
    pool: &DbPool,
    actor: &AuthUser,
    action: &str,
    target_type: &'static str,
    target_id: cognihire_core::types::DbId,
    payload: Option<serde_json::Value>,
) {
    let entry = CreateAuditLogEntry {
        tenant_id: Some(actor.tenant_id),
        actor_user_id: Some(actor.user_id),
        action: action.to_string(),
        target_type: Some(target_type.to_string()),
        target_id: Some(target_id),
        ip: None,
        user_agent: None,
        payload_json: payload,
    };
    append_best_effort(pool, &entry).await;
}

/// Append an arbitrary entry. Never fails the caller.
pub async fn append_best_effort(pool: &DbPool, entry: &CreateAuditLogEntry) {
    if let Err(err) = cognihire_db::repositories::AuditLogRepo::append(pool, entry).await {
        tracing::warn!(
            error = %err,
            action = %entry.action,
            "Failed to write audit log entry"
        );
    }
}
