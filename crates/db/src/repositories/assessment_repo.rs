//! Repository for the `assessments` table.
//!
//! Lifecycle transitions are transactional: the row is locked with
//! `FOR UPDATE`, owner and status are checked in order, and the UPDATE
//! carries the same status predicate so two concurrent callers cannot
//! both succeed.

use cognihire_core::lifecycle::AssessmentStatus;
use cognihire_core::types::DbId;
use sqlx::PgPool;

use crate::models::assessment::{
    Assessment, AssessmentAdminView, CompleteOutcome, StartOutcome,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, tenant_id, candidate_id, job_role_id, status, \
                       started_at, completed_at, total_score, created_at";

/// Provides queries and guarded lifecycle transitions for assessments.
pub struct AssessmentRepo;

impl AssessmentRepo {
    /// Find an assessment by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Assessment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assessments WHERE id = $1");
        sqlx::query_as::<_, Assessment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// The candidate's current assessment: the newest row whose status is
    /// NOT_STARTED or IN_PROGRESS. COMPLETED assessments are never returned,
    /// even when more recent.
    pub async fn find_current(
        pool: &PgPool,
        candidate_id: DbId,
    ) -> Result<Option<Assessment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM assessments
             WHERE candidate_id = $1 AND status IN ('NOT_STARTED', 'IN_PROGRESS')
             ORDER BY created_at DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, Assessment>(&query)
            .bind(candidate_id)
            .fetch_optional(pool)
            .await
    }

    /// Start an assessment: NOT_STARTED -> IN_PROGRESS, `started_at = now`.
    ///
    /// The owner check happens before the status check so a non-owner always
    /// observes NotOwner regardless of the assessment's state.
    pub async fn start(
        pool: &PgPool,
        id: DbId,
        caller_id: DbId,
    ) -> Result<StartOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let row: Option<(DbId, String)> =
            sqlx::query_as("SELECT candidate_id, status FROM assessments WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        let Some((candidate_id, status)) = row else {
            return Ok(StartOutcome::NotFound);
        };
        if candidate_id != caller_id {
            return Ok(StartOutcome::NotOwner);
        }
        if status != AssessmentStatus::NotStarted.as_str() {
            return Ok(StartOutcome::WrongStatus(status));
        }

        let query = format!(
            "UPDATE assessments
             SET status = 'IN_PROGRESS', started_at = NOW()
             WHERE id = $1 AND status = 'NOT_STARTED'
             RETURNING {COLUMNS}"
        );
        let assessment = sqlx::query_as::<_, Assessment>(&query)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(StartOutcome::Started(assessment))
    }

    /// Complete an assessment: IN_PROGRESS -> COMPLETED.
    ///
    /// Runs as a single transaction so the score computation and the status
    /// flip are observed consistently: the assessment row is locked, the
    /// total is summed over SUBMITTED items (empty sum is 0, not null), and
    /// the UPDATE keeps the optimistic status predicate. A second concurrent
    /// caller observes COMPLETED and gets `WrongStatus`.
    pub async fn complete(
        pool: &PgPool,
        id: DbId,
        caller_id: DbId,
    ) -> Result<CompleteOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let row: Option<(DbId, String)> =
            sqlx::query_as("SELECT candidate_id, status FROM assessments WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        let Some((candidate_id, status)) = row else {
            return Ok(CompleteOutcome::NotFound);
        };
        if candidate_id != caller_id {
            return Ok(CompleteOutcome::NotOwner);
        }
        if status != AssessmentStatus::InProgress.as_str() {
            return Ok(CompleteOutcome::WrongStatus(status));
        }

        let total_score: i32 = sqlx::query_scalar(
            "SELECT COALESCE(SUM(score), 0)::INT FROM assessment_items
             WHERE assessment_id = $1 AND status = 'SUBMITTED'",
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            "UPDATE assessments
             SET status = 'COMPLETED', completed_at = NOW(), total_score = $2
             WHERE id = $1 AND status = 'IN_PROGRESS'",
        )
        .bind(id)
        .bind(total_score)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(CompleteOutcome::Completed { total_score })
    }

    /// Admin listing, scoped to one tenant, optionally filtered by status,
    /// joined with candidate name and job-role title. Newest first.
    pub async fn list_for_tenant(
        pool: &PgPool,
        tenant_id: DbId,
        status: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<AssessmentAdminView>, sqlx::Error> {
        let status_clause = if status.is_some() {
            "AND a.status = $2"
        } else {
            ""
        };
        let (limit_param, offset_param) = if status.is_some() { (3, 4) } else { (2, 3) };

        let query = format!(
            "SELECT a.id, a.candidate_id, a.job_role_id, a.status,
                    a.started_at, a.completed_at, a.total_score,
                    p.full_name AS candidate_name, r.title AS job_role_title
             FROM assessments a
             JOIN job_roles r ON r.id = a.job_role_id
             LEFT JOIN candidate_profiles p ON p.user_id = a.candidate_id
             WHERE a.tenant_id = $1 {status_clause}
             ORDER BY a.created_at DESC
             LIMIT ${limit_param} OFFSET ${offset_param}"
        );

        let mut q = sqlx::query_as::<_, AssessmentAdminView>(&query).bind(tenant_id);
        if let Some(status) = status {
            q = q.bind(status);
        }
        q.bind(limit).bind(offset).fetch_all(pool).await
    }
}
