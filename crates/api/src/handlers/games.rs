//! Handlers for the `/games` catalog (read-only).

use axum::extract::{Path, State};
use axum::Json;
use cognihire_core::error::CoreError;
use cognihire_core::types::DbId;
use cognihire_db::models::game::Game;
use cognihire_db::repositories::GameRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/games
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> AppResult<Json<DataResponse<Vec<Game>>>> {
    let games = GameRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: games }))
}

/// GET /api/v1/games/{id}
pub async fn get(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<Game>> {
    let game = GameRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "game", id }))?;
    Ok(Json(game))
}
