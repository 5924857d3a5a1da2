use actix_web::{HttpResponse, Result, web};
use sqlx::PgPool;
use validator::Validate;

use auth_services::middleware::AuthenticatedUser;
use auth_services::service::AuthService;
use auth_services::types::{
    AuthError, CreateUserRequest, UpdateProfileRequest, UserExistsQuery, UserExistsResponse,
};

/// Creates a user account on first sign-in. The account always starts as a
/// participant; any role the client supplies is ignored.
pub async fn create_user(
    pool: web::Data<PgPool>,
    request: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AuthError> {
    request
        .validate()
        .map_err(|e| AuthError::Validation(format!("Validation error: {}", e)))?;

    let auth_service = AuthService::new(pool.get_ref().clone());
    let user = auth_service.create_user(&request).await?;

    Ok(HttpResponse::Created().json(user))
}

/// Reports whether an account with the given email exists. Used by the
/// sign-in flow before a token is available.
pub async fn user_exists(
    pool: web::Data<PgPool>,
    query: web::Query<UserExistsQuery>,
) -> Result<HttpResponse, AuthError> {
    let auth_service = AuthService::new(pool.get_ref().clone());
    let exists = auth_service.user_exists(&query.email).await?;

    Ok(HttpResponse::Ok().json(UserExistsResponse { exists }))
}

/// Fetches a user profile by email.
pub async fn get_user(
    pool: web::Data<PgPool>,
    _user: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, AuthError> {
    let email = path.into_inner();
    let auth_service = AuthService::new(pool.get_ref().clone());

    let user = auth_service
        .get_user_by_email(&email)
        .await?
        .ok_or(AuthError::UserNotFound)?;

    Ok(HttpResponse::Ok().json(user))
}

/// Updates a user profile's display fields and returns the updated account.
pub async fn update_profile(
    pool: web::Data<PgPool>,
    _user: AuthenticatedUser,
    path: web::Path<String>,
    request: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, AuthError> {
    request
        .validate()
        .map_err(|e| AuthError::Validation(format!("Validation error: {}", e)))?;

    let email = path.into_inner();
    let auth_service = AuthService::new(pool.get_ref().clone());
    let updated_user = auth_service.update_profile(&email, &request).await?;

    Ok(HttpResponse::Ok().json(updated_user))
}

/// Lists every user account for the organizer dashboard.
pub async fn list_users(
    pool: web::Data<PgPool>,
    _user: AuthenticatedUser,
) -> Result<HttpResponse, AuthError> {
    let auth_service = AuthService::new(pool.get_ref().clone());
    let users = auth_service.list_users().await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "users": users,
        "count": users.len()
    })))
}
