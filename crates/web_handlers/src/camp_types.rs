use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Request structure for creating a medical camp
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCampRequest {
    /// Display name of the camp
    #[validate(length(min = 1, message = "Camp name is required"))]
    pub name: String,

    /// Venue of the camp
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,

    /// When the camp takes place
    pub starts_at: DateTime<Utc>,

    /// Lead healthcare professional attending the camp
    pub healthcare_professional: Option<String>,

    /// Free-text description shown on the camp page
    pub description: Option<String>,

    /// Banner image URL
    pub image_url: Option<String>,

    /// Registration fee in dollars
    #[validate(range(min = 0.0, message = "Fees cannot be negative"))]
    #[serde(default)]
    pub fees: f64,
}

/// Response structure for creating a camp
#[derive(Debug, Serialize)]
pub struct CreateCampResponse {
    /// Identifier of the newly created camp
    pub inserted_id: Uuid,
}

/// Request structure for updating a camp's organizer-set fields
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCampRequest {
    /// Display name of the camp
    #[validate(length(min = 1, message = "Camp name is required"))]
    pub name: String,

    /// Venue of the camp
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,

    /// When the camp takes place
    pub starts_at: DateTime<Utc>,

    /// Lead healthcare professional attending the camp
    pub healthcare_professional: Option<String>,

    /// Free-text description shown on the camp page
    pub description: Option<String>,

    /// Banner image URL
    pub image_url: Option<String>,

    /// Registration fee in dollars
    #[validate(range(min = 0.0, message = "Fees cannot be negative"))]
    #[serde(default)]
    pub fees: f64,
}

/// Structure representing a camp from the database
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Camp {
    /// Unique identifier for the camp
    pub id: Uuid,
    /// Display name of the camp
    pub name: String,
    /// Venue of the camp
    pub location: String,
    /// When the camp takes place
    pub starts_at: DateTime<Utc>,
    /// Lead healthcare professional attending the camp
    pub healthcare_professional: Option<String>,
    /// Free-text description shown on the camp page
    pub description: Option<String>,
    /// Banner image URL
    pub image_url: Option<String>,
    /// Registration fee in dollars
    pub fees: f64,
    /// Number of participants who joined; increment-only
    pub participant_count: i32,
    /// When the camp was created
    pub created_at: DateTime<Utc>,
    /// When the camp was last updated
    pub updated_at: DateTime<Utc>,
}

/// Response structure for listing camps
#[derive(Debug, Serialize)]
pub struct ListCampsResponse {
    /// The camps matching the requested view
    pub camps: Vec<Camp>,
    /// Total count of returned camps
    pub total: i64,
}

/// Custom error type for camp operations
#[derive(thiserror::Error, Debug)]
pub enum CampError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Camp not found
    #[error("Camp not found")]
    NotFound,
}

impl actix_web::ResponseError for CampError {
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::HttpResponse;

        match self {
            CampError::Validation(msg) => HttpResponse::BadRequest().json(serde_json::json!({
                "error": "validation_error",
                "message": msg
            })),
            CampError::NotFound => HttpResponse::NotFound().json(serde_json::json!({
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
    fn test_create_camp_request_requires_core_fields() {
        let missing_name: CreateCampRequest = serde_json::from_str(
            r#"{"name":"","location":"City Hall","starts_at":"2026-09-01T09:00:00Z"}"#,
        )
        .unwrap();
        assert!(missing_name.validate().is_err());

        let valid: CreateCampRequest = serde_json::from_str(
            r#"{"name":"Eye Camp","location":"City Hall","starts_at":"2026-09-01T09:00:00Z","fees":25.0}"#,
        )
        .unwrap();
        assert!(valid.validate().is_ok());
    }

    #[test]
    fn test_create_camp_request_rejects_negative_fees() {
        let request: CreateCampRequest = serde_json::from_str(
            r#"{"name":"Eye Camp","location":"City Hall","starts_at":"2026-09-01T09:00:00Z","fees":-1.0}"#,
        )
        .unwrap();
        assert!(request.validate().is_err());
    }
}
