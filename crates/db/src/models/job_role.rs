//! Job role entity model.
//!
//! Job roles are evaluation templates. They are immutable from this core's
//! perspective (owned by an external admin provisioning component), so there
//! is no update DTO here.

use cognihire_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A named evaluation template with trait weights and configuration.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct JobRole {
    pub id: DbId,
    pub tenant_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub traits_json: Option<serde_json::Value>,
    pub config_json: Option<serde_json::Value>,
    pub created_at: Timestamp,
}
