use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use cognihire_api::auth::jwt::{generate_access_token, JwtConfig};
use cognihire_api::auth::password::hash_password;
use cognihire_api::config::ServerConfig;
use cognihire_api::router::build_app_router;
use cognihire_api::state::AppState;
use cognihire_core::types::DbId;
use cognihire_db::models::tenant::Tenant;
use cognihire_db::models::user::{CreateUser, User};
use cognihire_db::repositories::{TenantRepo, UserRepo};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-not-for-production".to_string(),
            access_token_expiry_mins: 30,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This goes through [`build_app_router`] so integration tests exercise the
/// same middleware stack (CORS, request ID, timeout, tracing, panic
/// recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request without authentication.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a GET request with a Bearer token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("GET")
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body, no authentication.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body and a Bearer token.
pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be valid JSON")
}

// ---------------------------------------------------------------------------
// Seed helpers
// ---------------------------------------------------------------------------

/// The default tenant all seeded users belong to unless stated otherwise.
pub async fn default_tenant(pool: &PgPool) -> Tenant {
    TenantRepo::find_or_create_default(pool)
        .await
        .expect("default tenant should be creatable")
}

/// Create a user directly in the database, returning the row and the
/// plaintext password used.
pub async fn create_test_user(
    pool: &PgPool,
    tenant_id: DbId,
    username: &str,
    role: &str,
) -> (User, String) {
    let password = "test_password_123!";
    let hashed = hash_password(password).expect("hashing should succeed");
    let input = CreateUser {
        tenant_id,
        username: username.to_string(),
        email: format!("{username}@test.com"),
        password_hash: hashed,
        role: role.to_string(),
    };
    let user = UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed");
    (user, password.to_string())
}

/// Mint an access token for a seeded user, signed with the test secret.
pub fn token_for(user: &User) -> String {
    let config = test_config();
    generate_access_token(user.id, user.tenant_id, &user.role, &config.jwt)
        .expect("token generation should succeed")
}

/// Insert a job role and return its id.
pub async fn seed_job_role(pool: &PgPool, tenant_id: DbId, title: &str) -> DbId {
    let id = Uuid::now_v7();
    sqlx::query("INSERT INTO job_roles (id, tenant_id, title) VALUES ($1, $2, $3)")
        .bind(id)
        .bind(tenant_id)
        .bind(title)
        .execute(pool)
        .await
        .expect("job role insert should succeed");
    id
}

/// Insert a game and return its id.
pub async fn seed_game(pool: &PgPool, code: &str) -> DbId {
    let id = Uuid::now_v7();
    sqlx::query("INSERT INTO games (id, code, title) VALUES ($1, $2, $3)")
        .bind(id)
        .bind(code)
        .bind(format!("Game {code}"))
        .execute(pool)
        .await
        .expect("game insert should succeed");
    id
}

/// Insert an assessment in status NOT_STARTED and return its id.
pub async fn seed_assessment(
    pool: &PgPool,
    tenant_id: DbId,
    candidate_id: DbId,
    job_role_id: DbId,
) -> DbId {
    let id = Uuid::now_v7();
    sqlx::query(
        "INSERT INTO assessments (id, tenant_id, candidate_id, job_role_id, status)
         VALUES ($1, $2, $3, $4, 'NOT_STARTED')",
    )
    .bind(id)
    .bind(tenant_id)
    .bind(candidate_id)
    .bind(job_role_id)
    .execute(pool)
    .await
    .expect("assessment insert should succeed");
    id
}

/// Insert a PENDING assessment item and return its id.
pub async fn seed_item(pool: &PgPool, assessment_id: DbId, game_id: DbId, order: i32) -> DbId {
    let id = Uuid::now_v7();
    sqlx::query(
        "INSERT INTO assessment_items (id, assessment_id, game_id, order_index, status)
         VALUES ($1, $2, $3, $4, 'PENDING')",
    )
    .bind(id)
    .bind(assessment_id)
    .bind(game_id)
    .bind(order)
    .execute(pool)
    .await
    .expect("assessment item insert should succeed");
    id
}
