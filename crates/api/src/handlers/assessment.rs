//! Handlers for the `/assessments` resource (candidate-facing lifecycle).

use axum::extract::{Path, State};
use axum::Json;
use cognihire_core::error::CoreError;
use cognihire_core::types::DbId;
use cognihire_db::models::assessment::{Assessment, CompleteOutcome, StartOutcome};
use cognihire_db::models::assessment_item::{AssessmentItem, SubmitOutcome};
use cognihire_db::repositories::{AssessmentItemRepo, AssessmentRepo, JobRoleRepo};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::audit;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireCandidate;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /assessments/{id}/items/{item_id}/submit`.
#[derive(Debug, Deserialize)]
pub struct SubmitItemRequest {
    pub score: i32,
    pub metrics_json: Option<serde_json::Value>,
}

/// Response body for the current-assessment view: the row plus its items in
/// play order.
#[derive(Debug, Serialize)]
pub struct AssessmentDetail {
    #[serde(flatten)]
    pub assessment: Assessment,
    pub items: Vec<AssessmentItem>,
}

/// Envelope for `GET /assessments/current`. `assessment` is null when the
/// candidate has no open assessment; that is a normal answer, not an error.
#[derive(Debug, Serialize)]
pub struct CurrentAssessmentResponse {
    pub assessment: Option<AssessmentDetail>,
}

/// Response body for a successful completion.
#[derive(Debug, Serialize)]
pub struct CompleteResponse {
    pub id: DbId,
    pub status: &'static str,
    pub total_score: i32,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/assessments/current
///
/// The caller's newest open (NOT_STARTED or IN_PROGRESS) assessment with its
/// items, or `{"assessment": null}` when there is none. COMPLETED
/// assessments are never surfaced here, even when newer.
pub async fn get_current(
    State(state): State<AppState>,
    RequireCandidate(user): RequireCandidate,
) -> AppResult<Json<CurrentAssessmentResponse>> {
    let Some(assessment) = AssessmentRepo::find_current(&state.pool, user.user_id).await? else {
        return Ok(Json(CurrentAssessmentResponse { assessment: None }));
    };

    let items = AssessmentItemRepo::list_for_assessment(&state.pool, assessment.id).await?;

    Ok(Json(CurrentAssessmentResponse {
        assessment: Some(AssessmentDetail { assessment, items }),
    }))
}

/// POST /api/v1/assessments/{id}/start
///
/// NOT_STARTED -> IN_PROGRESS. Owner-only; the repo checks ownership before
/// status so a non-owner always gets 403 regardless of state.
pub async fn start(
    State(state): State<AppState>,
    RequireCandidate(user): RequireCandidate,
    Path(id): Path<DbId>,
) -> AppResult<Json<Assessment>> {
    let assessment = match AssessmentRepo::start(&state.pool, id, user.user_id).await? {
        StartOutcome::Started(assessment) => assessment,
        StartOutcome::NotFound => {
            return Err(AppError::Core(CoreError::NotFound {
                entity: "assessment",
                id,
            }))
        }
        StartOutcome::NotOwner => {
            return Err(AppError::Core(CoreError::Forbidden(
                "Assessment belongs to another candidate".into(),
            )))
        }
        StartOutcome::WrongStatus(status) => {
            return Err(AppError::Core(CoreError::InvalidState(format!(
                "Cannot start assessment in status {status}"
            ))))
        }
    };

    audit::record(
        &state.pool,
        &user,
        audit::ACTION_ASSESSMENT_STARTED,
        "assessment",
        id,
        None,
    )
    .await;

    Ok(Json(assessment))
}

/// POST /api/v1/assessments/{id}/items/{item_id}/submit
///
/// Record an item's score and metrics, moving it to SUBMITTED. Requires the
/// parent assessment to be IN_PROGRESS and owned by the caller; a second
/// submit for the same item is rejected.
pub async fn submit_item(
    State(state): State<AppState>,
    RequireCandidate(user): RequireCandidate,
    Path((id, item_id)): Path<(DbId, DbId)>,
    Json(input): Json<SubmitItemRequest>,
) -> AppResult<Json<AssessmentItem>> {
    if input.score < 0 {
        return Err(AppError::Core(CoreError::Validation(
            "score must be non-negative".into(),
        )));
    }

    let outcome = AssessmentItemRepo::submit(
        &state.pool,
        item_id,
        id,
        user.user_id,
        input.score,
        input.metrics_json.as_ref(),
    )
    .await?;

    match outcome {
        SubmitOutcome::Submitted => {}
        SubmitOutcome::NotFound => {
            return Err(AppError::Core(CoreError::NotFound {
                entity: "assessment item",
                id: item_id,
            }))
        }
        SubmitOutcome::NotOwner => {
            return Err(AppError::Core(CoreError::Forbidden(
                "Assessment belongs to another candidate".into(),
            )))
        }
        SubmitOutcome::WrongStatus(status) => {
            return Err(AppError::Core(CoreError::InvalidState(format!(
                "Cannot submit item while status is {status}"
            ))))
        }
    }

    audit::record(
        &state.pool,
        &user,
        audit::ACTION_ITEM_SUBMITTED,
        "assessment_item",
        item_id,
        Some(json!({ "assessment_id": id, "score": input.score })),
    )
    .await;

    let item = AssessmentItemRepo::find_by_id(&state.pool, item_id)
        .await?
        .ok_or_else(|| AppError::InternalError("Submitted item vanished".into()))?;

    Ok(Json(item))
}

/// POST /api/v1/assessments/{id}/complete
///
/// IN_PROGRESS -> COMPLETED. The total score is the sum over SUBMITTED items,
/// computed inside the same transaction as the status flip.
pub async fn complete(
    State(state): State<AppState>,
    RequireCandidate(user): RequireCandidate,
    Path(id): Path<DbId>,
) -> AppResult<Json<CompleteResponse>> {
    let total_score = match AssessmentRepo::complete(&state.pool, id, user.user_id).await? {
        CompleteOutcome::Completed { total_score } => total_score,
        CompleteOutcome::NotFound => {
            return Err(AppError::Core(CoreError::NotFound {
                entity: "assessment",
                id,
            }))
        }
        CompleteOutcome::NotOwner => {
            return Err(AppError::Core(CoreError::Forbidden(
                "Assessment belongs to another candidate".into(),
            )))
        }
        CompleteOutcome::WrongStatus(status) => {
            return Err(AppError::Core(CoreError::InvalidState(format!(
                "Cannot complete assessment in status {status}"
            ))))
        }
    };

    // Audit snapshot carries the score and the job-role title so the trail
    // is readable without further joins.
    let job_role_title = match AssessmentRepo::find_by_id(&state.pool, id).await? {
        Some(assessment) => JobRoleRepo::resolve_title(&state.pool, assessment.job_role_id).await?,
        None => None,
    };
    audit::record(
        &state.pool,
        &user,
        audit::ACTION_ASSESSMENT_COMPLETED,
        "assessment",
        id,
        Some(json!({ "total_score": total_score, "job_role_title": job_role_title })),
    )
    .await;

    Ok(Json(CompleteResponse {
        id,
        status: cognihire_core::lifecycle::AssessmentStatus::Completed.as_str(),
        total_score,
    }))
}
