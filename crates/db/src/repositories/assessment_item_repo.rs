//! Repository for the `assessment_items` table.

use cognihire_core::lifecycle::{AssessmentStatus, ItemStatus};
use cognihire_core::types::DbId;
use sqlx::PgPool;

use crate::models::assessment_item::{AssessmentItem, SubmitOutcome};

const COLUMNS: &str = "id, assessment_id, game_id, order_index, timer_seconds, \
                       status, score, metrics_json, config_snapshot";

/// Provides queries and the guarded submit transition for assessment items.
pub struct AssessmentItemRepo;

impl AssessmentItemRepo {
    /// List an assessment's items in play order.
    pub async fn list_for_assessment(
        pool: &PgPool,
        assessment_id: DbId,
    ) -> Result<Vec<AssessmentItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM assessment_items
             WHERE assessment_id = $1
             ORDER BY order_index ASC"
        );
        sqlx::query_as::<_, AssessmentItem>(&query)
            .bind(assessment_id)
            .fetch_all(pool)
            .await
    }

    /// Find an item by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<AssessmentItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assessment_items WHERE id = $1");
        sqlx::query_as::<_, AssessmentItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Submit an item: record score and metrics, status -> SUBMITTED.
    ///
    /// Locks the item and its parent assessment together; the parent must be
    /// IN_PROGRESS and owned by `caller_id`, and the item must not already
    /// be SUBMITTED. Scores recorded here feed the parent's total at
    /// completion time; a submit racing a `complete` call serializes on the
    /// assessment row lock, so the item is either in the total or rejected.
    pub async fn submit(
        pool: &PgPool,
        item_id: DbId,
        assessment_id: DbId,
        caller_id: DbId,
        score: i32,
        metrics: Option<&serde_json::Value>,
    ) -> Result<SubmitOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let row: Option<(DbId, String, String)> = sqlx::query_as(
            "SELECT a.candidate_id, a.status, i.status
             FROM assessment_items i
             JOIN assessments a ON a.id = i.assessment_id
             WHERE i.id = $1 AND i.assessment_id = $2
             FOR UPDATE OF i, a",
        )
        .bind(item_id)
        .bind(assessment_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some((candidate_id, assessment_status, item_status)) = row else {
            return Ok(SubmitOutcome::NotFound);
        };
        if candidate_id != caller_id {
            return Ok(SubmitOutcome::NotOwner);
        }
        if assessment_status != AssessmentStatus::InProgress.as_str() {
            return Ok(SubmitOutcome::WrongStatus(assessment_status));
        }
        if item_status == ItemStatus::Submitted.as_str() {
            return Ok(SubmitOutcome::WrongStatus(item_status));
        }

        sqlx::query(
            "UPDATE assessment_items
             SET status = 'SUBMITTED', score = $2, metrics_json = $3
             WHERE id = $1",
        )
        .bind(item_id)
        .bind(score)
        .bind(metrics)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(SubmitOutcome::Submitted)
    }
}
