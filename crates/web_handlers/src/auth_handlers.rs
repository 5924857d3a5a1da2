use actix_web::cookie::{Cookie, SameSite};
use actix_web::{HttpResponse, Result, web};
use validator::Validate;

use auth_services::jwt::JwtService;
use auth_services::types::{AuthError, TokenRequest, TokenResponse};

/// Issues a session token for a signed-in identity. The token is returned in
/// the body and also set as an http-only cookie so browser clients can rely
/// on either delivery.
pub async fn issue_token(request: web::Json<TokenRequest>) -> Result<HttpResponse, AuthError> {
    request
        .validate()
        .map_err(|e| AuthError::Validation(format!("Validation error: {}", e)))?;

    let jwt_service = JwtService::new();
    let token = jwt_service.generate_session_token(&request)?;

    let cookie = Cookie::build("token", token.clone())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish();

    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(TokenResponse { success: true, token }))
}

/// Clears the session cookie.
pub async fn logout() -> Result<HttpResponse> {
    let mut cookie = Cookie::build("token", "")
        .path("/")
        .http_only(true)
        .finish();
    cookie.make_removal();

    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(serde_json::json!({ "success": true })))
}

/// Health check endpoint for the auth routes
pub async fn auth_health() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "service": "auth",
        "status": "healthy",
        "timestamp": chrono::Utc::now()
    })))
}
