//! Game entity model.

use cognihire_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A mini-game backing assessment items.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Game {
    pub id: DbId,
    pub code: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub base_config: Option<serde_json::Value>,
}
