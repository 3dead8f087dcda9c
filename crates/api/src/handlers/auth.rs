//! Handlers for the `/auth` resource (login, register, profile, password).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use cognihire_core::error::CoreError;
use cognihire_core::roles::ROLE_CANDIDATE;
use cognihire_db::models::candidate_profile::{CandidateProfile, CreateCandidateProfile};
use cognihire_db::models::user::{CreateUser, UserResponse};
use cognihire_db::repositories::{CandidateRepo, TenantRepo, UserRepo};
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use crate::audit;
use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Request body for `POST /auth/register` (candidate self-registration).
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 50, message = "username must be 3-50 characters"))]
    pub username: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
    pub full_name: Option<String>,
}

/// Request body for `POST /auth/change-password`.
#[derive(Debug, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    #[validate(length(min = 8, message = "new password must be at least 8 characters"))]
    pub new_password: String,
}

/// Successful authentication response returned by login and register.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserResponse,
}

/// Response body for `GET /auth/me`.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: UserResponse,
    pub profile: Option<CandidateProfile>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Authenticate with username + password. Returns an access token.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    // 1. Find user by username.
    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid username or password".into(),
            ))
        })?;

    // 2. Check if the account is active.
    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    // 3. Verify password.
    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid username or password".into(),
        )));
    }

    // 4. On success: set last_login_at, mint the token.
    UserRepo::record_successful_login(&state.pool, user.id).await?;

    let access_token = generate_access_token(user.id, user.tenant_id, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let actor = AuthUser {
        user_id: user.id,
        tenant_id: user.tenant_id,
        role: user.role.clone(),
    };
    audit::record(
        &state.pool,
        &actor,
        audit::ACTION_LOGIN,
        "user",
        user.id,
        None,
    )
    .await;

    Ok(Json(AuthResponse {
        access_token,
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
        user: user.into(),
    }))
}

/// POST /api/v1/auth/register
///
/// Self-registration for candidates. New users land in the default tenant
/// with the CANDIDATE role and are logged in immediately.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    // Uniqueness pre-checks give friendly messages; the uq_ constraints are
    // the real guard against races (handled as 409 by classify_sqlx_error).
    if UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "Username is already taken".into(),
        )));
    }
    if UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "Email is already registered".into(),
        )));
    }

    let tenant = TenantRepo::find_or_create_default(&state.pool).await?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            tenant_id: tenant.id,
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
            job_role_id: None,
        },
    )
    .await?;

    let access_token = generate_access_token(user.id, user.tenant_id, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let actor = AuthUser {
        user_id: user.id,
        tenant_id: user.tenant_id,
        role: user.role.clone(),
    };
    audit::record(
        &state.pool,
        &actor,
        audit::ACTION_REGISTER,
        "user",
        user.id,
        None,
    )
    .await;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            access_token,
            expires_in: state.config.jwt.access_token_expiry_mins * 60,
            user: user.into(),
        }),
    ))
}

/// GET /api/v1/auth/me
///
/// The authenticated user's own account and candidate profile (if any).
pub async fn me(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<ProfileResponse>> {
    let user = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    let profile = CandidateRepo::find_profile(&state.pool, user.id).await?;

    Ok(Json(ProfileResponse {
        user: user.into(),
        profile,
    }))
}

/// POST /api/v1/auth/change-password
///
/// Change the authenticated user's password after verifying the current one.
pub async fn change_password(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<ChangePasswordRequest>,
) -> AppResult<StatusCode> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let user = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    let current_valid = verify_password(&input.current_password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !current_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Current password is incorrect".into(),
        )));
    }

    let new_hash = hash_password(&input.new_password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
    UserRepo::update_password(&state.pool, user.id, &new_hash).await?;

    audit::record(
        &state.pool,
        &auth_user,
        audit::ACTION_CHANGE_PASSWORD,
        "user",
        user.id,
        Some(json!({ "self_service": true })),
    )
    .await;

    Ok(StatusCode::NO_CONTENT)
}
