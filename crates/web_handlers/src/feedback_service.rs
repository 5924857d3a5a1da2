use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::feedback_types::*;

/// Service for feedback operations
pub struct FeedbackService {
    pool: PgPool,
}

impl FeedbackService {
    /// Creates a new instance of `FeedbackService` with the provided database connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Stores a feedback entry for an attended camp
    pub async fn submit_feedback(
        &self,
        participant_email: &str,
        request: &SubmitFeedbackRequest,
    ) -> Result<FeedbackWithCamp, FeedbackError> {
        let camp = sqlx::query("SELECT name FROM camps WHERE id = $1")
            .bind(request.camp_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(FeedbackError::CampNotFound)?;

        let camp_name: String = camp.get("name");

        let row = sqlx::query(
            r#"
            INSERT INTO feedback (
                camp_id, participant_email, participant_name, photo_url, rating, comment
            ) VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, camp_id, participant_email, participant_name,
                      photo_url, rating, comment, created_at
            "#,
        )
        .bind(request.camp_id)
        .bind(participant_email.to_lowercase())
        .bind(&request.participant_name)
        .bind(&request.photo_url)
        .bind(request.rating)
        .bind(request.comment.trim())
        .fetch_one(&self.pool)
        .await?;

        Ok(FeedbackWithCamp {
            id: row.get("id"),
            camp_id: row.get("camp_id"),
            camp_name,
            participant_email: row.get("participant_email"),
            participant_name: row.get("participant_name"),
            photo_url: row.get("photo_url"),
            rating: row.get("rating"),
            comment: row.get("comment"),
            created_at: row.get("created_at"),
        })
    }

    /// Lists every feedback entry, newest first
    pub async fn list_feedback(&self) -> Result<Vec<FeedbackWithCamp>, FeedbackError> {
        let rows = sqlx::query(
            r#"
            SELECT
                f.id, f.camp_id, f.participant_email, f.participant_name,
                f.photo_url, f.rating, f.comment, f.created_at,
                c.name AS camp_name
            FROM feedback f
            LEFT JOIN camps c ON f.camp_id = c.id
            ORDER BY f.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(feedback_with_camp).collect())
    }

    /// Lists a participant's feedback entries
    pub async fn feedback_for_participant(
        &self,
        participant_email: &str,
    ) -> Result<Vec<FeedbackWithCamp>, FeedbackError> {
        let rows = sqlx::query(
            r#"
            SELECT
                f.id, f.camp_id, f.participant_email, f.participant_name,
                f.photo_url, f.rating, f.comment, f.created_at,
                c.name AS camp_name
            FROM feedback f
            LEFT JOIN camps c ON f.camp_id = c.id
            WHERE f.participant_email = $1
            ORDER BY f.created_at DESC
            "#,
        )
        .bind(participant_email.to_lowercase())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(feedback_with_camp).collect())
    }

    /// Deletes a feedback entry
    pub async fn delete_feedback(&self, feedback_id: &Uuid) -> Result<(), FeedbackError> {
        let result = sqlx::query("DELETE FROM feedback WHERE id = $1")
            .bind(feedback_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(FeedbackError::NotFound);
        }

        Ok(())
    }
}

fn feedback_with_camp(row: sqlx::postgres::PgRow) -> FeedbackWithCamp {
    FeedbackWithCamp {
        id: row.get("id"),
        camp_id: row.get("camp_id"),
        camp_name: row
            .get::<Option<String>, _>("camp_name")
            .unwrap_or_else(|| "Unknown Camp".to_string()),
        participant_email: row.get("participant_email"),
        participant_name: row.get("participant_name"),
        photo_url: row.get("photo_url"),
        rating: row.get("rating"),
        comment: row.get("comment"),
        created_at: row.get("created_at"),
    }
}
