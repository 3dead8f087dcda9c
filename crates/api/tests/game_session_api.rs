//! HTTP-level integration tests for game sessions: creation, the action
//! dispatch endpoint, ownership scoping, and listing.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json_auth};
use sqlx::PgPool;
use uuid::Uuid;
use cognihire_core::roles::{ROLE_ADMIN, ROLE_CANDIDATE};
use cognihire_core::types::DbId;
use cognihire_db::models::user::User;

/// Seed a candidate with an IN_PROGRESS assessment, one item, and one game.
async fn seed_session_fixture(pool: &PgPool, username: &str) -> (User, String, DbId, DbId, DbId) {
    let tenant = common::default_tenant(pool).await;
    let (candidate, _) = common::create_test_user(pool, tenant.id, username, ROLE_CANDIDATE).await;
    let job_role = common::seed_job_role(pool, tenant.id, "Engineer").await;
    let game = common::seed_game(pool, &format!("{username}-reaction")).await;
    let assessment = common::seed_assessment(pool, tenant.id, candidate.id, job_role).await;
    let item = common::seed_item(pool, assessment, game, 0).await;

    sqlx::query("UPDATE assessments SET status = 'IN_PROGRESS', started_at = NOW() WHERE id = $1")
        .bind(assessment)
        .execute(pool)
        .await
        .expect("status update should succeed");

    let token = common::token_for(&candidate);
    (candidate, token, assessment, item, game)
}

/// Create a session through the API and return its JSON body.
async fn create_session(
    pool: &PgPool,
    token: &str,
    assessment: DbId,
    item: DbId,
    game: DbId,
) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/game-sessions",
        serde_json::json!({
            "assessment_id": assessment,
            "assessment_item_id": item,
            "game_id": game
        }),
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Creation
// ---------------------------------------------------------------------------

/// Creating a session returns 201 with status ACTIVE, and two creations get
/// distinct ids.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_session(pool: PgPool) {
    let (_, token, assessment, item, game) = seed_session_fixture(&pool, "creator").await;

    let first = create_session(&pool, &token, assessment, item, game).await;
    assert_eq!(first["status"], "ACTIVE");
    assert!(first["started_at"].is_string());
    assert!(first["completed_at"].is_null());

    let second = create_session(&pool, &token, assessment, item, game).await;
    assert_ne!(first["id"], second["id"], "session ids must be unique");
}

/// Creating a session against someone else's assessment is reported as 404,
/// indistinguishable from a missing assessment.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_for_foreign_assessment_is_404(pool: PgPool) {
    let (_, _, assessment, item, game) = seed_session_fixture(&pool, "victim").await;
    let tenant = common::default_tenant(&pool).await;
    let (intruder, _) = common::create_test_user(&pool, tenant.id, "sneaky", ROLE_CANDIDATE).await;
    let intruder_token = common::token_for(&intruder);

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/game-sessions",
        serde_json::json!({
            "assessment_id": assessment,
            "assessment_item_id": item,
            "game_id": game
        }),
        &intruder_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Admins cannot create sessions: writes are candidate-only.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_cannot_create_session(pool: PgPool) {
    let (_, _, assessment, item, game) = seed_session_fixture(&pool, "observed").await;
    let tenant = common::default_tenant(&pool).await;
    let (admin, _) = common::create_test_user(&pool, tenant.id, "sessadmin", ROLE_ADMIN).await;
    let admin_token = common::token_for(&admin);

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/game-sessions",
        serde_json::json!({
            "assessment_id": assessment,
            "assessment_item_id": item,
            "game_id": game
        }),
        &admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// Admins cannot complete a session either: the write path is candidate-only
/// even for a same-tenant admin.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_cannot_complete_session(pool: PgPool) {
    let (_, token, assessment, item, game) = seed_session_fixture(&pool, "guarded").await;
    let session = create_session(&pool, &token, assessment, item, game).await;
    let session_id = session["id"].as_str().unwrap().to_string();

    let tenant = common::default_tenant(&pool).await;
    let (admin, _) = common::create_test_user(&pool, tenant.id, "finishadmin", ROLE_ADMIN).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        &format!("/api/v1/game-sessions/{session_id}"),
        serde_json::json!({ "action": "complete" }),
        &common::token_for(&admin),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // The session stays ACTIVE.
    let app = common::build_test_app(pool);
    let response = get_auth(app, &format!("/api/v1/game-sessions/{session_id}"), &token).await;
    let json = body_json(response).await;
    assert_eq!(json["status"], "ACTIVE");
}

// ---------------------------------------------------------------------------
// Action dispatch
// ---------------------------------------------------------------------------

/// The complete action moves ACTIVE -> COMPLETED and stores metrics; a
/// second complete is rejected with 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_complete_session(pool: PgPool) {
    let (_, token, assessment, item, game) = seed_session_fixture(&pool, "finisher").await;
    let session = create_session(&pool, &token, assessment, item, game).await;
    let session_id = session["id"].as_str().unwrap().to_string();

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        &format!("/api/v1/game-sessions/{session_id}"),
        serde_json::json!({
            "action": "complete",
            "metrics_json": { "reaction_ms": 412, "hits": 17 }
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "COMPLETED");
    assert!(json["completed_at"].is_string());
    assert_eq!(json["metrics_json"]["reaction_ms"], 412);

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        &format!("/api/v1/game-sessions/{session_id}"),
        serde_json::json!({ "action": "complete" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_STATE");
}

/// Unknown actions are rejected with 400 before any state changes.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_unknown_action_rejected(pool: PgPool) {
    let (_, token, assessment, item, game) = seed_session_fixture(&pool, "actor").await;
    let session = create_session(&pool, &token, assessment, item, game).await;
    let session_id = session["id"].as_str().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        &format!("/api/v1/game-sessions/{session_id}"),
        serde_json::json!({ "action": "pause" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_ACTION");

    // The session is untouched.
    let app = common::build_test_app(pool);
    let response = get_auth(app, &format!("/api/v1/game-sessions/{session_id}"), &token).await;
    let json = body_json(response).await;
    assert_eq!(json["status"], "ACTIVE");
}

// ---------------------------------------------------------------------------
// Reads and scoping
// ---------------------------------------------------------------------------

/// Owners and same-tenant admins can read a session; another candidate gets
/// 403; an admin from a different tenant gets 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_session_scoping(pool: PgPool) {
    let (_, token, assessment, item, game) = seed_session_fixture(&pool, "readable").await;
    let session = create_session(&pool, &token, assessment, item, game).await;
    let session_id = session["id"].as_str().unwrap().to_string();

    let tenant = common::default_tenant(&pool).await;
    let (other_candidate, _) =
        common::create_test_user(&pool, tenant.id, "othercand", ROLE_CANDIDATE).await;
    let (admin, _) = common::create_test_user(&pool, tenant.id, "tenantadmin", ROLE_ADMIN).await;

    // A second tenant with its own admin.
    let foreign_tenant = Uuid::now_v7();
    sqlx::query("INSERT INTO tenants (id, name, subdomain) VALUES ($1, 'Other Co', 'other')")
        .bind(foreign_tenant)
        .execute(&pool)
        .await
        .expect("tenant insert should succeed");
    let (foreign_admin, _) =
        common::create_test_user(&pool, foreign_tenant, "foreignadmin", ROLE_ADMIN).await;

    // Owner: 200.
    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, &format!("/api/v1/game-sessions/{session_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(
        json.get("tenant_id").is_none(),
        "tenant_id is internal and must not be serialized"
    );

    // Same-tenant admin: 200.
    let app = common::build_test_app(pool.clone());
    let response = get_auth(
        app,
        &format!("/api/v1/game-sessions/{session_id}"),
        &common::token_for(&admin),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Another candidate: 403.
    let app = common::build_test_app(pool.clone());
    let response = get_auth(
        app,
        &format!("/api/v1/game-sessions/{session_id}"),
        &common::token_for(&other_candidate),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Foreign-tenant admin: 404, not 403.
    let app = common::build_test_app(pool);
    let response = get_auth(
        app,
        &format!("/api/v1/game-sessions/{session_id}"),
        &common::token_for(&foreign_admin),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Candidates list only their own sessions; admins see the whole tenant.
/// A zero limit falls back to the default instead of erroring.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_sessions_scoped(pool: PgPool) {
    let (_, token_a, assessment_a, item_a, game_a) = seed_session_fixture(&pool, "lister_a").await;
    let (_, token_b, assessment_b, item_b, game_b) = seed_session_fixture(&pool, "lister_b").await;
    create_session(&pool, &token_a, assessment_a, item_a, game_a).await;
    create_session(&pool, &token_a, assessment_a, item_a, game_a).await;
    create_session(&pool, &token_b, assessment_b, item_b, game_b).await;

    let tenant = common::default_tenant(&pool).await;
    let (admin, _) = common::create_test_user(&pool, tenant.id, "listadmin", ROLE_ADMIN).await;

    // Candidate A sees exactly their two sessions.
    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/game-sessions?limit=0", &token_a).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    // Admin sees all three in the tenant.
    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/game-sessions", &common::token_for(&admin)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 3);

    // Filtering by assessment narrows the admin view.
    let app = common::build_test_app(pool);
    let response = get_auth(
        app,
        &format!("/api/v1/game-sessions?assessment_id={assessment_b}"),
        &common::token_for(&admin),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}
