//! Handlers for the `/game-sessions` resource.
//!
//! Sessions are created and driven by candidates; admins have read access
//! within their tenant. A session's owner is always derived by joining
//! through its parent assessment.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use cognihire_core::error::CoreError;
use cognihire_core::lifecycle::{SessionStatus, SESSION_ACTION_COMPLETE};
use cognihire_core::paging::{clamp_limit, clamp_offset};
use cognihire_core::roles::ROLE_ADMIN;
use cognihire_core::types::DbId;
use cognihire_db::models::game_session::{
    CreateGameSession, GameSession, GameSessionFilter, GameSessionView,
};
use cognihire_db::repositories::game_session_repo::SessionScope;
use cognihire_db::repositories::{
    AssessmentItemRepo, AssessmentRepo, GameRepo, GameSessionRepo,
};
use serde::Deserialize;
use serde_json::json;

use crate::audit;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireCandidate;
use crate::query::GameSessionListParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /game-sessions`.
#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    pub assessment_id: DbId,
    pub assessment_item_id: DbId,
    pub game_id: DbId,
    /// Optional initial metrics, stored verbatim.
    pub metrics_json: Option<serde_json::Value>,
}

/// Request body for `POST /game-sessions/{id}` (action dispatch).
#[derive(Debug, Deserialize)]
pub struct SessionActionRequest {
    pub action: String,
    pub metrics_json: Option<serde_json::Value>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/game-sessions
///
/// Create a session in status ACTIVE for an item of the caller's own
/// assessment. An assessment that does not exist or belongs to someone else
/// is reported as 404 so candidates cannot probe for other ids.
pub async fn create(
    State(state): State<AppState>,
    RequireCandidate(user): RequireCandidate,
    Json(input): Json<CreateSessionRequest>,
) -> AppResult<(StatusCode, Json<GameSession>)> {
    let assessment = AssessmentRepo::find_by_id(&state.pool, input.assessment_id).await?;
    let owned = assessment
        .as_ref()
        .is_some_and(|a| a.candidate_id == user.user_id);
    if !owned {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "assessment",
            id: input.assessment_id,
        }));
    }

    let item = AssessmentItemRepo::find_by_id(&state.pool, input.assessment_item_id)
        .await?
        .filter(|i| i.assessment_id == input.assessment_id)
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation(
                "assessment_item_id does not belong to the assessment".into(),
            ))
        })?;

    if GameRepo::find_by_id(&state.pool, input.game_id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "game",
            id: input.game_id,
        }));
    }

    let session = GameSessionRepo::create(
        &state.pool,
        &CreateGameSession {
            assessment_id: input.assessment_id,
            assessment_item_id: item.id,
            game_id: input.game_id,
            metrics_json: input.metrics_json,
        },
    )
    .await?;

    audit::record(
        &state.pool,
        &user,
        audit::ACTION_SESSION_CREATED,
        "game_session",
        session.id,
        Some(json!({ "assessment_id": input.assessment_id, "game_id": input.game_id })),
    )
    .await;

    Ok((StatusCode::CREATED, Json(session)))
}

/// GET /api/v1/game-sessions/{id}
///
/// Fetch one session. Candidates see only their own (403 otherwise); admins
/// see any session in their tenant, and a session in a foreign tenant is
/// indistinguishable from a missing one (404).
pub async fn get(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<GameSessionView>> {
    let session = GameSessionRepo::find_view(&state.pool, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "game session",
                id,
            })
        })?;

    if user.role == ROLE_ADMIN {
        if session.tenant_id != user.tenant_id {
            return Err(AppError::Core(CoreError::NotFound {
                entity: "game session",
                id,
            }));
        }
    } else if session.candidate_id != user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Game session belongs to another candidate".into(),
        )));
    }

    Ok(Json(session))
}

/// POST /api/v1/game-sessions/{id}
///
/// Action dispatch on a session. The only supported action is `"complete"`:
/// ACTIVE -> COMPLETED, storing the submitted metrics verbatim. Unknown
/// actions are rejected before any state is touched.
pub async fn action(
    State(state): State<AppState>,
    RequireCandidate(user): RequireCandidate,
    Path(id): Path<DbId>,
    Json(input): Json<SessionActionRequest>,
) -> AppResult<Json<GameSessionView>> {
    if input.action != SESSION_ACTION_COMPLETE {
        return Err(AppError::Core(CoreError::InvalidAction(format!(
            "Unknown action '{}'; supported: '{SESSION_ACTION_COMPLETE}'",
            input.action
        ))));
    }

    let session = GameSessionRepo::find_view(&state.pool, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "game session",
                id,
            })
        })?;

    if session.candidate_id != user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Game session belongs to another candidate".into(),
        )));
    }

    let metrics = input.metrics_json.unwrap_or_else(|| json!({}));
    let completed = GameSessionRepo::complete(&state.pool, id, &metrics).await?;
    if !completed {
        // Lost the race or the session was already terminal.
        return Err(AppError::Core(CoreError::InvalidState(format!(
            "Cannot complete a session that is not {}",
            SessionStatus::Active.as_str()
        ))));
    }

    audit::record(
        &state.pool,
        &user,
        audit::ACTION_SESSION_COMPLETED,
        "game_session",
        id,
        None,
    )
    .await;

    let updated = GameSessionRepo::find_view(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::InternalError("Completed session vanished".into()))?;

    Ok(Json(updated))
}

/// GET /api/v1/game-sessions
///
/// List sessions, newest first. Admins see their whole tenant; candidates
/// see only sessions under their own assessments. The scope is applied
/// server-side on top of any caller filters.
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<GameSessionListParams>,
) -> AppResult<Json<DataResponse<Vec<GameSessionView>>>> {
    let scope = if user.role == ROLE_ADMIN {
        SessionScope::Tenant(user.tenant_id)
    } else {
        SessionScope::Candidate(user.user_id)
    };

    let filter = GameSessionFilter {
        assessment_id: params.assessment_id,
    };
    let limit = clamp_limit(params.limit);
    let offset = clamp_offset(params.offset);

    let sessions = GameSessionRepo::list(&state.pool, scope, &filter, limit, offset).await?;

    Ok(Json(DataResponse { data: sessions }))
}
