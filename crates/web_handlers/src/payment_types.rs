use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Request structure for starting a card charge with the payment processor
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePaymentIntentRequest {
    /// Amount to charge in dollars
    #[validate(range(min = 0.01, message = "Invalid amount"))]
    pub amount: f64,
}

/// Response structure carrying the processor's client-side secret
#[derive(Debug, Serialize)]
pub struct PaymentIntentResponse {
    /// Always true when an intent was created
    pub success: bool,
    /// Secret the browser uses to confirm the charge
    pub client_secret: String,
}

/// Request structure for recording a completed payment in the ledger
#[derive(Debug, Deserialize, Validate)]
pub struct RecordPaymentRequest {
    /// ID of the camp the fee was paid for
    pub camp_id: Uuid,

    /// Email of the paying participant
    #[validate(email(message = "Please enter a valid email"))]
    pub participant_email: String,

    /// Amount charged in dollars
    #[validate(range(min = 0.01, message = "Invalid amount"))]
    pub amount: f64,

    /// Processor-side transaction identifier
    #[validate(length(min = 1, message = "Transaction ID is required"))]
    pub transaction_id: String,
}

/// Ledger entry enriched with camp information
#[derive(Debug, Serialize)]
pub struct PaymentWithCamp {
    /// Unique identifier for the ledger entry
    pub id: Uuid,
    /// ID of the camp the fee was paid for
    pub camp_id: Uuid,
    /// Name of the camp the fee was paid for
    pub camp_name: String,
    /// Email of the paying participant
    pub participant_email: String,
    /// Amount charged in dollars
    pub amount: f64,
    /// Processor-side transaction identifier
    pub transaction_id: String,
    /// When the payment was recorded
    pub created_at: DateTime<Utc>,
}

/// Response structure for the payment history page
#[derive(Debug, Serialize)]
pub struct ListPaymentsResponse {
    /// Ledger entries enriched with camp information
    pub payments: Vec<PaymentWithCamp>,
    /// Total count of returned entries
    pub total: i64,
}

/// Custom error type for payment ledger operations
#[derive(thiserror::Error, Debug)]
pub enum PaymentError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// The referenced camp does not exist
    #[error("Camp not found")]
    CampNotFound,

    /// The participant has no ledger entries
    #[error("No payments found")]
    NoPaymentsFound,
}

impl actix_web::ResponseError for PaymentError {
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::HttpResponse;

        match self {
            PaymentError::Validation(msg) => HttpResponse::BadRequest().json(serde_json::json!({
                "error": "validation_error",
                "message": msg
            })),
            PaymentError::CampNotFound => HttpResponse::NotFound().json(serde_json::json!({
                "error": "camp_not_found",
                "message": "Camp not found"
            })),
            PaymentError::NoPaymentsFound => HttpResponse::NotFound().json(serde_json::json!({
                "error": "no_payments_found",
                "message": "No payments found"
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
    fn test_record_payment_request_validation() {
        let valid: RecordPaymentRequest = serde_json::from_str(
            r#"{"camp_id":"7f2c9f1e-41f2-4ba8-93a5-1f4f3f6f9d10","participant_email":"pat@example.com","amount":25.0,"transaction_id":"pi_123"}"#,
        )
        .unwrap();
        assert!(valid.validate().is_ok());

        let no_txn: RecordPaymentRequest = serde_json::from_str(
            r#"{"camp_id":"7f2c9f1e-41f2-4ba8-93a5-1f4f3f6f9d10","participant_email":"pat@example.com","amount":25.0,"transaction_id":""}"#,
        )
        .unwrap();
        assert!(no_txn.validate().is_err());

        let zero_amount: RecordPaymentRequest = serde_json::from_str(
            r#"{"camp_id":"7f2c9f1e-41f2-4ba8-93a5-1f4f3f6f9d10","participant_email":"pat@example.com","amount":0.0,"transaction_id":"pi_123"}"#,
        )
        .unwrap();
        assert!(zero_amount.validate().is_err());

        let bad_email: RecordPaymentRequest = serde_json::from_str(
            r#"{"camp_id":"7f2c9f1e-41f2-4ba8-93a5-1f4f3f6f9d10","participant_email":"not-an-email","amount":25.0,"transaction_id":"pi_123"}"#,
        )
        .unwrap();
        assert!(bad_email.validate().is_err());
    }
}
