use serde::Deserialize;

/// Payment intent returned by Stripe. Only the fields the platform reads are kept.
#[derive(Debug, Deserialize)]
pub struct PaymentIntent {
    /// Stripe identifier for the intent (pi_...)
    pub id: String,

    /// Client-side secret handed to the browser to confirm the charge
    pub client_secret: String,

    /// Amount in the smallest currency unit (cents)
    pub amount: i64,

    /// Three-letter currency code
    pub currency: String,

    /// Processor-side status of the intent
    pub status: String,
}

/// Error envelope returned by Stripe on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct StripeErrorResponse {
    /// The error detail object
    pub error: StripeErrorDetail,
}

/// Detail of a Stripe API error.
#[derive(Debug, Deserialize)]
pub struct StripeErrorDetail {
    /// Human-readable message from the processor
    pub message: Option<String>,

    /// Stripe error category (api_error, card_error, ...)
    #[serde(rename = "type")]
    pub error_type: Option<String>,
}

/// Custom error type for payment processor operations
#[derive(Debug, thiserror::Error)]
pub enum PaymentApiError {
    /// STRIPE_SECRET_KEY is not configured
    #[error("Stripe secret key is not configured")]
    MissingSecretKey,

    /// The requested amount is not a positive, finite number
    #[error("Invalid payment amount")]
    InvalidAmount,

    /// Transport-level failure talking to Stripe
    #[error("Stripe request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Stripe rejected the request
    #[error("Stripe error ({status}): {message}")]
    Api {
        /// HTTP status returned by Stripe
        status: u16,
        /// Message from the processor's error envelope
        message: String,
    },
}

impl actix_web::ResponseError for PaymentApiError {
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::HttpResponse;

        match self {
            PaymentApiError::InvalidAmount => HttpResponse::BadRequest().json(serde_json::json!({
                "error": "invalid_amount",
                "message": "Payment amount must be a positive number"
            })),
            PaymentApiError::Api { message, .. } => {
                HttpResponse::BadGateway().json(serde_json::json!({
                    "error": "payment_processor_error",
                    "message": message
                }))
            }
            _ => HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "internal_error",
                "message": "An internal error occurred"
            })),
        }
    }
}
