use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Request structure for submitting feedback after attending a camp
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitFeedbackRequest {
    /// ID of the attended camp
    pub camp_id: Uuid,

    /// Star rating, 1 through 5
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i32,

    /// Free-text feedback
    #[validate(length(min = 1, message = "Feedback text is required"))]
    pub comment: String,

    /// Display name shown alongside the feedback
    pub participant_name: Option<String>,

    /// Avatar URL shown alongside the feedback
    pub photo_url: Option<String>,
}

/// Feedback entry enriched with camp information
#[derive(Debug, Serialize)]
pub struct FeedbackWithCamp {
    /// Unique identifier for the feedback entry
    pub id: Uuid,
    /// ID of the attended camp
    pub camp_id: Uuid,
    /// Name of the camp the feedback is about
    pub camp_name: String,
    /// Email of the participant who wrote the feedback
    pub participant_email: String,
    /// Display name shown alongside the feedback
    pub participant_name: Option<String>,
    /// Avatar URL shown alongside the feedback
    pub photo_url: Option<String>,
    /// Star rating, 1 through 5
    pub rating: i32,
    /// Free-text feedback
    pub comment: String,
    /// When the feedback was submitted
    pub created_at: DateTime<Utc>,
}

/// Response structure for listing feedback
#[derive(Debug, Serialize)]
pub struct ListFeedbackResponse {
    /// Feedback entries enriched with camp information
    pub feedback: Vec<FeedbackWithCamp>,
    /// Total count of returned entries
    pub total: i64,
}

/// Custom error type for feedback operations
#[derive(thiserror::Error, Debug)]
pub enum FeedbackError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Feedback entry not found
    #[error("Feedback not found")]
    NotFound,

    /// The referenced camp does not exist
    #[error("Camp not found")]
    CampNotFound,
}

impl actix_web::ResponseError for FeedbackError {
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::HttpResponse;

        match self {
            FeedbackError::Validation(msg) => HttpResponse::BadRequest().json(serde_json::json!({
                "error": "validation_error",
                "message": msg
            })),
            FeedbackError::NotFound => HttpResponse::NotFound().json(serde_json::json!({
                "error": "feedback_not_found",
                "message": "Feedback not found"
            })),
            FeedbackError::CampNotFound => HttpResponse::NotFound().json(serde_json::json!({
                "error": "camp_not_found",
                "message": "Camp not found"
            })),
            _ => HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "internal_error",
                "message": "An internal error occurred"
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_rating_bounds() {
        let base = r#"{"camp_id":"7f2c9f1e-41f2-4ba8-93a5-1f4f3f6f9d10","rating":RATING,"comment":"Great camp"}"#;

        for (rating, ok) in [("0", false), ("1", true), ("5", true), ("6", false)] {
            let request: SubmitFeedbackRequest =
                serde_json::from_str(&base.replace("RATING", rating)).unwrap();
            assert_eq!(request.validate().is_ok(), ok, "rating {}", rating);
        }
    }

    #[test]
    fn test_feedback_requires_comment() {
        let request: SubmitFeedbackRequest = serde_json::from_str(
            r#"{"camp_id":"7f2c9f1e-41f2-4ba8-93a5-1f4f3f6f9d10","rating":4,"comment":""}"#,
        )
        .unwrap();
        assert!(request.validate().is_err());
    }
}
