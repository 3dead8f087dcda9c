//! HTTP-level integration tests for auth endpoints: login, registration,
//! profile, and password change.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json, post_json_auth};
use sqlx::PgPool;
use cognihire_core::roles::{ROLE_ADMIN, ROLE_CANDIDATE};
use cognihire_db::repositories::UserRepo;

/// Log in a user via the API and return the JSON response containing
/// `access_token` and `user` info.
async fn login_user(app: axum::Router, username: &str, password: &str) -> serde_json::Value {
    let body = serde_json::json!({ "username": username, "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

/// Successful login returns 200 with access_token and user info, and never
/// leaks the password hash.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let tenant = common::default_tenant(&pool).await;
    let (user, password) = common::create_test_user(&pool, tenant.id, "loginuser", ROLE_CANDIDATE).await;
    let app = common::build_test_app(pool);

    let json = login_user(app, "loginuser", &password).await;

    assert!(json["access_token"].is_string(), "response must contain access_token");
    assert!(json["expires_in"].is_number(), "response must contain expires_in");
    assert_eq!(json["user"]["id"], serde_json::json!(user.id));
    assert_eq!(json["user"]["username"], "loginuser");
    assert_eq!(json["user"]["email"], "loginuser@test.com");
    assert_eq!(json["user"]["role"], ROLE_CANDIDATE);
    assert!(
        json["user"].get("password_hash").is_none(),
        "password hash must never be serialized"
    );
}

/// Login with an incorrect password returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    let tenant = common::default_tenant(&pool).await;
    common::create_test_user(&pool, tenant.id, "wrongpw", ROLE_CANDIDATE).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "wrongpw", "password": "incorrect_password" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Login with a nonexistent username returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_nonexistent_user(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "ghost", "password": "whatever" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Login to a deactivated account returns 403.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_inactive_user(pool: PgPool) {
    let tenant = common::default_tenant(&pool).await;
    let (user, password) = common::create_test_user(&pool, tenant.id, "inactive", ROLE_CANDIDATE).await;
    UserRepo::set_active(&pool, user.id, false)
        .await
        .expect("deactivation should succeed");

    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "inactive", "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

/// Self-registration creates a CANDIDATE in the default tenant and logs the
/// user in immediately.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_success(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let body = serde_json::json!({
        "username": "newcandidate",
        "email": "newcandidate@test.com",
        "password": "strong_password_1",
        "full_name": "New Candidate"
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["access_token"].is_string());
    assert_eq!(json["user"]["username"], "newcandidate");
    assert_eq!(json["user"]["role"], ROLE_CANDIDATE);

    // The profile row was created alongside the account.
    let user_id: uuid::Uuid =
        serde_json::from_value(json["user"]["id"].clone()).expect("user id should parse");
    let profile = cognihire_db::repositories::CandidateRepo::find_profile(&pool, user_id)
        .await
        .expect("profile lookup should succeed")
        .expect("profile should exist");
    assert_eq!(profile.full_name.as_deref(), Some("New Candidate"));
}

/// Registering a taken username returns 409.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_duplicate_username(pool: PgPool) {
    let tenant = common::default_tenant(&pool).await;
    common::create_test_user(&pool, tenant.id, "taken", ROLE_CANDIDATE).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "username": "taken",
        "email": "other@test.com",
        "password": "strong_password_1"
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

/// A password shorter than 8 characters is rejected with 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_weak_password(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "username": "weakpw",
        "email": "weakpw@test.com",
        "password": "short"
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Profile and password change
// ---------------------------------------------------------------------------

/// GET /auth/me returns the caller's account; missing token returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_me(pool: PgPool) {
    let tenant = common::default_tenant(&pool).await;
    let (user, _) = common::create_test_user(&pool, tenant.id, "meuser", ROLE_ADMIN).await;
    let token = common::token_for(&user);

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/auth/me", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["user"]["username"], "meuser");
    assert_eq!(json["user"]["role"], ROLE_ADMIN);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/auth/me").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Changing the password requires the current one and takes effect for the
/// next login.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_change_password(pool: PgPool) {
    let tenant = common::default_tenant(&pool).await;
    let (user, password) = common::create_test_user(&pool, tenant.id, "pwchanger", ROLE_CANDIDATE).await;
    let token = common::token_for(&user);

    // Wrong current password is rejected.
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "current_password": "not-the-password",
        "new_password": "brand_new_password"
    });
    let response = post_json_auth(app, "/api/v1/auth/change-password", body, &token).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Correct current password succeeds with 204.
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "current_password": password,
        "new_password": "brand_new_password"
    });
    let response = post_json_auth(app, "/api/v1/auth/change-password", body, &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Old password no longer works, new one does.
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "username": "pwchanger", "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let app = common::build_test_app(pool);
    login_user(app, "pwchanger", "brand_new_password").await;
}
