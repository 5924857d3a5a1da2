use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Request structure for joining a camp. The participant email comes from the
/// verified session, never from the body.
#[derive(Debug, Deserialize)]
pub struct CreateRegistrationRequest {
    /// ID of the camp to join
    pub camp_id: Uuid,

    /// Display name recorded with the registration
    pub participant_name: Option<String>,
}

/// Structure representing a registration from the database
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Registration {
    /// Unique identifier for the registration
    pub id: Uuid,
    /// ID of the joined camp
    pub camp_id: Uuid,
    /// Email of the registered participant
    pub participant_email: String,
    /// Display name recorded with the registration
    pub participant_name: Option<String>,
    /// Organizer-set approval state: "Pending" or "Confirmed"
    pub confirmation_status: String,
    /// Fee state: "unpaid" or "Paid"
    pub payment_status: String,
    /// When the registration was created
    pub created_at: DateTime<Utc>,
    /// When the registration was last updated
    pub updated_at: DateTime<Utc>,
}

/// Registration enriched with camp information for dashboards and the payment page
#[derive(Debug, Serialize)]
pub struct RegistrationWithCamp {
    /// Unique identifier for the registration
    pub id: Uuid,
    /// ID of the joined camp
    pub camp_id: Uuid,
    /// Name of the joined camp
    pub camp_name: String,
    /// Venue of the joined camp
    pub camp_location: String,
    /// Registration fee of the joined camp in dollars
    pub camp_fees: f64,
    /// Email of the registered participant
    pub participant_email: String,
    /// Display name recorded with the registration
    pub participant_name: Option<String>,
    /// Organizer-set approval state: "Pending" or "Confirmed"
    pub confirmation_status: String,
    /// Fee state: "unpaid" or "Paid"
    pub payment_status: String,
    /// When the registration was created
    pub created_at: DateTime<Utc>,
}

/// Request structure for updating a registration's payment status
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePaymentStatusRequest {
    /// New payment status
    #[validate(custom(function = "validate_payment_status"))]
    pub payment_status: String,
}

/// Response structure for listing registrations
#[derive(Debug, Serialize)]
pub struct ListRegistrationsResponse {
    /// Registrations enriched with camp information
    pub registrations: Vec<RegistrationWithCamp>,
    /// Total count of returned registrations
    pub total: i64,
}

/// Approval state set by organizers on accepted registrations.
pub const CONFIRMED_STATUS: &str = "Confirmed";

/// Fee state recorded after a successful charge.
pub const PAID_STATUS: &str = "Paid";

/// Custom error type for registration operations
#[derive(thiserror::Error, Debug)]
pub enum RegistrationError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Registration not found
    #[error("Registration not found")]
    NotFound,

    /// The referenced camp does not exist
    #[error("Camp not found")]
    CampNotFound,

    /// Paid registrations cannot be cancelled
    #[error("Cannot cancel a paid registration")]
    PaidCancellation,

    /// The participant has no registrations
    #[error("No registered camps found")]
    NoRegisteredCamps,
}

impl actix_web::ResponseError for RegistrationError {
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::HttpResponse;

        match self {
            RegistrationError::Validation(msg) => {
                HttpResponse::BadRequest().json(serde_json::json!({
                    "error": "validation_error",
                    "message": msg
                }))
            }
            RegistrationError::NotFound => HttpResponse::NotFound().json(serde_json::json!({
                "error": "registration_not_found",
                "message": "Registration not found"
            })),
            RegistrationError::CampNotFound => HttpResponse::NotFound().json(serde_json::json!({
                "error": "camp_not_found",
                "message": "Camp not found"
            })),
            RegistrationError::PaidCancellation => {
                HttpResponse::Conflict().json(serde_json::json!({
                    "error": "registration_paid",
                    "message": "Cannot cancel a paid registration"
                }))
            }
            RegistrationError::NoRegisteredCamps => {
                HttpResponse::NotFound().json(serde_json::json!({
                    "error": "no_registered_camps",
                    "message": "No registered camps found"
                }))
            }
            _ => HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "internal_error",
                "message": "An internal error occurred"
            })),
        }
    }
}

/// Custom validation function for payment status
fn validate_payment_status(status: &str) -> Result<(), validator::ValidationError> {
    match status {
        "unpaid" | "Paid" => Ok(()),
        _ => Err(validator::ValidationError::new("invalid_payment_status")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_payment_status_validation() {
        assert!(validate_payment_status("unpaid").is_ok());
        assert!(validate_payment_status("Paid").is_ok());
        assert!(validate_payment_status("paid").is_err());
        assert!(validate_payment_status("Refunded").is_err());
        assert!(validate_payment_status("").is_err());
    }

    #[test]
    fn test_paid_cancellation_maps_to_conflict() {
        assert_eq!(
            RegistrationError::PaidCancellation.error_response().status(),
            409
        );
    }
}
