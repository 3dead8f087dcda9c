//! Shared query parameter types for API handlers.

use cognihire_core::types::DbId;
use serde::Deserialize;

/// Query parameters for `GET /game-sessions`.
///
/// Raw `limit`/`offset` values are clamped via `cognihire_core::paging`
/// before reaching SQL.
#[derive(Debug, Deserialize)]
pub struct GameSessionListParams {
    pub assessment_id: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
