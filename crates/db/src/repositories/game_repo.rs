//! Repository for the `games` table.

use cognihire_core::types::DbId;
use sqlx::PgPool;

use crate::models::game::Game;

const COLUMNS: &str = "id, code, title, description, base_config";

/// Provides lookups for the game catalog.
pub struct GameRepo;

impl GameRepo {
    /// List all games ordered by code.
    pub async fn list(pool: &PgPool) -> Result<Vec<Game>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM games ORDER BY code");
        sqlx::query_as::<_, Game>(&query).fetch_all(pool).await
    }

    /// Find a game by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Game>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM games WHERE id = $1");
        sqlx::query_as::<_, Game>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
