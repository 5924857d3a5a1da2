use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Request body for the token endpoint. The identity is established upstream
/// (federated sign-in on the client); this service only mints the session token.
#[derive(Debug, Deserialize, Validate)]
pub struct TokenRequest {
    /// Email address of the signed-in user
    #[validate(email(message = "Please enter a valid email"))]
    pub email: String,

    /// Display name of the signed-in user
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,

    /// Avatar URL of the signed-in user
    pub picture: Option<String>,
}

/// Response body for the token endpoint.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    /// Always true when a token was issued
    pub success: bool,
    /// The signed session token, also delivered as an http-only cookie
    pub token: String,
}

/// Request body for creating a user account on first sign-in.
///
/// There is deliberately no role field: accounts always start as participants
/// and organizers are promoted out of band.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Email address, unique per account
    #[validate(email(message = "Please enter a valid email"))]
    pub email: String,

    /// Display name
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,

    /// Avatar URL
    pub picture: Option<String>,
}

/// Request body for updating a user profile.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    /// New display name
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,

    /// New avatar URL
    pub picture: Option<String>,
}

/// Query parameters for the user existence check.
#[derive(Debug, Deserialize)]
pub struct UserExistsQuery {
    /// Email address to look up
    pub email: String,
}

/// Response body for the user existence check.
#[derive(Debug, Serialize)]
pub struct UserExistsResponse {
    /// Whether an account with the given email exists
    pub exists: bool,
}

// Database model - matching the exact schema
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct User {
    /// Unique identifier for the account
    pub id: Uuid,
    /// Email address, unique per account
    pub email: String,
    /// Display name
    pub name: Option<String>,
    /// Avatar URL
    pub picture: Option<String>,
    /// Account role: "participant" or "organizer"
    pub role: String,
    /// When the account was created
    pub created_at: DateTime<Utc>,
    /// When the account was last updated
    pub updated_at: DateTime<Utc>,
}

/// Role assigned to every newly created account.
pub const DEFAULT_ROLE: &str = "participant";

/// Role required by organizer-only routes.
pub const ORGANIZER_ROLE: &str = "organizer";

// JWT Claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Email of the session holder
    pub email: String,
    /// Display name of the session holder
    pub name: String,
    /// Avatar URL of the session holder
    pub picture: Option<String>,
    /// Expiration timestamp
    pub exp: usize,
    /// Issued-at timestamp
    pub iat: usize,
}

// Error types
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Authorization token is required")]
    MissingToken,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Organizer access required")]
    Forbidden,

    #[error("Email already exists")]
    EmailExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl actix_web::ResponseError for AuthError {
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::HttpResponse;

        match self {
            AuthError::MissingToken => HttpResponse::Unauthorized().json(serde_json::json!({
                "error": "missing_token",
                "message": "Authorization token is required"
            })),
            AuthError::InvalidToken => HttpResponse::Unauthorized().json(serde_json::json!({
                "error": "invalid_token",
                "message": "Invalid or expired token"
            })),
            AuthError::Forbidden => HttpResponse::Forbidden().json(serde_json::json!({
                "error": "forbidden",
                "message": "Organizer access required"
            })),
            AuthError::EmailExists => HttpResponse::Conflict().json(serde_json::json!({
                "error": "email_exists",
                "message": "An account with this email already exists"
            })),
            AuthError::UserNotFound => HttpResponse::NotFound().json(serde_json::json!({
                "error": "user_not_found",
                "message": "User not found"
            })),
            AuthError::Validation(msg) => HttpResponse::BadRequest().json(serde_json::json!({
                "error": "validation_error",
                "message": msg
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
    use actix_web::ResponseError;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(AuthError::MissingToken.error_response().status(), 401);
        assert_eq!(AuthError::InvalidToken.error_response().status(), 401);
        assert_eq!(AuthError::Forbidden.error_response().status(), 403);
        assert_eq!(AuthError::EmailExists.error_response().status(), 409);
        assert_eq!(AuthError::UserNotFound.error_response().status(), 404);
        assert_eq!(
            AuthError::Validation("bad".to_string())
                .error_response()
                .status(),
            400
        );
    }

    #[test]
    fn test_create_user_request_has_no_role_field() {
        // Clients may send a role alongside the profile fields; it is ignored
        // on deserialization and the account always starts as a participant.
        let request: CreateUserRequest = serde_json::from_str(
            r#"{"email":"p@example.com","name":"Pat","picture":null,"role":"organizer"}"#,
        )
        .unwrap();

        assert_eq!(request.email, "p@example.com");
        assert_eq!(DEFAULT_ROLE, "participant");
    }
}
