//! Repository for the `game_sessions` table.
//!
//! Session ownership is never stored on the session row: every read joins
//! through the parent assessment's `candidate_id`/`tenant_id` so the
//! ownership chain cannot go stale.

use cognihire_core::types::DbId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::game_session::{
    CreateGameSession, GameSession, GameSessionFilter, GameSessionView,
};

/// Columns of the bare session row.
const COLUMNS: &str = "id, assessment_id, assessment_item_id, game_id, status, \
                       started_at, completed_at, metrics_json";

/// Columns of the ownership-joined view (`s` = session, `a` = assessment).
const VIEW_COLUMNS: &str = "s.id, s.assessment_id, s.assessment_item_id, s.game_id, \
                            s.status, s.started_at, s.completed_at, s.metrics_json, \
                            a.candidate_id, a.tenant_id";

/// Who a session list is scoped to.
#[derive(Debug, Clone, Copy)]
pub enum SessionScope {
    /// ADMIN caller: all sessions in the caller's tenant.
    Tenant(DbId),
    /// CANDIDATE caller: only sessions under the caller's own assessments.
    Candidate(DbId),
}

/// Provides creation, lookups, and the guarded complete transition for
/// game sessions.
pub struct GameSessionRepo;

impl GameSessionRepo {
    /// Insert a new session in status ACTIVE.
    ///
    /// The id is `Uuid::now_v7()`: time-ordered and collision-free under
    /// concurrent creation without any coordinating lock.
    pub async fn create(
        pool: &PgPool,
        input: &CreateGameSession,
    ) -> Result<GameSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO game_sessions
                (id, assessment_id, assessment_item_id, game_id, status, started_at, metrics_json)
             VALUES ($1, $2, $3, $4, 'ACTIVE', NOW(), $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GameSession>(&query)
            .bind(Uuid::now_v7())
            .bind(input.assessment_id)
            .bind(input.assessment_item_id)
            .bind(input.game_id)
            .bind(&input.metrics_json)
            .fetch_one(pool)
            .await
    }

    /// Fetch a session joined with its ownership chain.
    pub async fn find_view(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<GameSessionView>, sqlx::Error> {
        let query = format!(
            "SELECT {VIEW_COLUMNS}
             FROM game_sessions s
             JOIN assessments a ON a.id = s.assessment_id
             WHERE s.id = $1"
        );
        sqlx::query_as::<_, GameSessionView>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Complete a session: ACTIVE -> COMPLETED, storing metrics verbatim.
    ///
    /// The status predicate makes the transition optimistic: returns `false`
    /// when the session was not ACTIVE (already completed).
    pub async fn complete(
        pool: &PgPool,
        id: DbId,
        metrics: &serde_json::Value,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE game_sessions
             SET status = 'COMPLETED', completed_at = NOW(), metrics_json = $2
             WHERE id = $1 AND status = 'ACTIVE'",
        )
        .bind(id)
        .bind(metrics)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List sessions for the given scope, newest start first.
    ///
    /// The scope condition is always applied regardless of caller-supplied
    /// filters, so a candidate can never widen the query past their own
    /// assessments. `limit`/`offset` must already be clamped.
    pub async fn list(
        pool: &PgPool,
        scope: SessionScope,
        filter: &GameSessionFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<GameSessionView>, sqlx::Error> {
        let scope_clause = match scope {
            SessionScope::Tenant(_) => "a.tenant_id = $1",
            SessionScope::Candidate(_) => "a.candidate_id = $1",
        };
        let assessment_clause = if filter.assessment_id.is_some() {
            "AND s.assessment_id = $2"
        } else {
            ""
        };
        let (limit_param, offset_param) = if filter.assessment_id.is_some() {
            (3, 4)
        } else {
            (2, 3)
        };

        let query = format!(
            "SELECT {VIEW_COLUMNS}
             FROM game_sessions s
             JOIN assessments a ON a.id = s.assessment_id
             WHERE {scope_clause} {assessment_clause}
             ORDER BY s.started_at DESC
             LIMIT ${limit_param} OFFSET ${offset_param}"
        );

        let scope_id = match scope {
            SessionScope::Tenant(id) | SessionScope::Candidate(id) => id,
        };

        let mut q = sqlx::query_as::<_, GameSessionView>(&query).bind(scope_id);
        if let Some(assessment_id) = filter.assessment_id {
            q = q.bind(assessment_id);
        }
        q.bind(limit).bind(offset).fetch_all(pool).await
    }
}
