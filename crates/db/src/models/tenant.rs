//! Tenant entity model.

use cognihire_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A tenant: the isolation boundary grouping users, job roles, and
/// assessments belonging to one organization.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tenant {
    pub id: DbId,
    pub name: String,
    pub subdomain: Option<String>,
    pub created_at: Timestamp,
}
