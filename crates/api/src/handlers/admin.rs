//! Handlers for the `/admin` resource (candidate management, assessment
//! oversight, analytics). All handlers require the ADMIN role and are
//! scoped to the caller's tenant.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use cognihire_core::error::CoreError;
use cognihire_core::lifecycle::AssessmentStatus;
use cognihire_core::paging::{clamp_limit, clamp_offset};
use cognihire_core::roles::ROLE_CANDIDATE;
use cognihire_core::types::DbId;
use cognihire_db::models::analytics::{OverviewCounts, FALLBACK_OVERVIEW};
use cognihire_db::models::assessment::AssessmentAdminView;
use cognihire_db::models::candidate_profile::{CandidateAdminView, CreateCandidateProfile};
use cognihire_db::models::user::{CreateUser, UserResponse};
use cognihire_db::repositories::{
    AnalyticsRepo, AssessmentRepo, CandidateRepo, JobRoleRepo, UserRepo,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use crate::audit;
use crate::auth::password::{generate_password, hash_password};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /admin/candidates`.
#[derive(Debug, Deserialize)]
pub struct CandidateListParams {
    pub is_active: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Query parameters for `GET /admin/assessments`.
#[derive(Debug, Deserialize)]
pub struct AssessmentListParams {
    pub status: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Request body for `POST /admin/candidates`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCandidateRequest {
    #[validate(length(min = 3, max = 50, message = "username must be 3-50 characters"))]
    pub username: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    pub full_name: Option<String>,
    pub job_role_id: Option<DbId>,
}

/// Response for candidate creation: the account plus the generated
/// temporary password, returned exactly once.
#[derive(Debug, Serialize)]
pub struct CreatedCandidateResponse {
    pub user: UserResponse,
    pub temporary_password: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/analytics/overview
///
/// Tenant-scoped dashboard counts. This endpoint fails open: when the store
/// errors, a static zeroed snapshot is returned with 200 rather than a 5xx,
/// so a dashboard never blanks out over a transient database problem.
pub async fn analytics_overview(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
) -> Json<OverviewCounts> {
    match AnalyticsRepo::overview(&state.pool, admin.tenant_id).await {
        Ok(counts) => Json(counts),
        Err(err) => {
            tracing::warn!(error = %err, "Analytics overview query failed, serving fallback");
            Json(FALLBACK_OVERVIEW)
        }
    }
}

/// GET /api/v1/admin/candidates
pub async fn list_candidates(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Query(params): Query<CandidateListParams>,
) -> AppResult<Json<DataResponse<Vec<CandidateAdminView>>>> {
    let limit = clamp_limit(params.limit);
    let offset = clamp_offset(params.offset);

    let candidates = CandidateRepo::list_for_tenant(
        &state.pool,
        admin.tenant_id,
        params.is_active,
        limit,
        offset,
    )
    .await?;

    Ok(Json(DataResponse { data: candidates }))
}

/// GET /api/v1/admin/candidates/{id}
pub async fn get_candidate(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<CandidateAdminView>> {
    let candidate = CandidateRepo::find_for_tenant(&state.pool, admin.tenant_id, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "candidate",
                id,
            })
        })?;
    Ok(Json(candidate))
}

/// POST /api/v1/admin/candidates
///
/// Create a candidate account in the admin's tenant with a generated
/// temporary password. The plaintext is returned once; only the hash is
/// stored.
pub async fn create_candidate(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<CreateCandidateRequest>,
) -> AppResult<(StatusCode, Json<CreatedCandidateResponse>)> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    if let Some(job_role_id) = input.job_role_id {
        let role = JobRoleRepo::find_by_id(&state.pool, job_role_id).await?;
        let in_tenant = role.is_some_and(|r| r.tenant_id == admin.tenant_id);
        if !in_tenant {
            return Err(AppError::Core(CoreError::NotFound {
                entity: "job role",
                id: job_role_id,
            }));
        }
    }

    let temporary_password = generate_password();
    let password_hash = hash_password(&temporary_password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            tenant_id: admin.tenant_id,
            username: input.username,
            email: input.email,
            password_hash,
            role: ROLE_CANDIDATE.to_string(),
        },
    )
    .await?;

    CandidateRepo::create_profile(
        &state.pool,
        &CreateCandidateProfile {
            user_id: user.id,
            full_name: input.full_name,
            job_role_id: input.job_role_id,
        },
    )
    .await?;

    audit::record(
        &state.pool,
        &admin,
        audit::ACTION_CREATE_CANDIDATE,
        "user",
        user.id,
        Some(json!({ "job_role_id": input.job_role_id })),
    )
    .await;

    Ok((
        StatusCode::CREATED,
        Json(CreatedCandidateResponse {
            user: user.into(),
            temporary_password,
        }),
    ))
}

/// GET /api/v1/admin/assessments
///
/// Tenant-scoped assessment listing with candidate names and job-role
/// titles. An unknown `status` filter is rejected rather than silently
/// matching nothing.
pub async fn list_assessments(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Query(params): Query<AssessmentListParams>,
) -> AppResult<Json<DataResponse<Vec<AssessmentAdminView>>>> {
    let status = match params.status.as_deref() {
        Some(raw) => Some(
            AssessmentStatus::parse(raw)
                .ok_or_else(|| {
                    AppError::Core(CoreError::Validation(format!(
                        "Unknown assessment status '{raw}'"
                    )))
                })?
                .as_str(),
        ),
        None => None,
    };

    let limit = clamp_limit(params.limit);
    let offset = clamp_offset(params.offset);

    let assessments =
        AssessmentRepo::list_for_tenant(&state.pool, admin.tenant_id, status, limit, offset)
            .await?;

    Ok(Json(DataResponse { data: assessments }))
}
