use actix_web::{HttpResponse, Result, web};
use validator::Validate;

use crate::registration_service::RegistrationService;
use crate::registration_types::*;
use auth_services::middleware::AuthenticatedUser;

/// Registers the authenticated participant for a camp
pub async fn create_registration(
    pool: web::Data<sqlx::PgPool>,
    user: AuthenticatedUser,
    request: web::Json<CreateRegistrationRequest>,
) -> Result<HttpResponse, RegistrationError> {
    let registration_service = RegistrationService::new(pool.get_ref().clone());
    let registration = registration_service
        .create_registration(&user.0.email, &request)
        .await?;

    Ok(HttpResponse::Created().json(registration))
}

/// Lists every registration for the organizer dashboard
pub async fn list_registrations(
    pool: web::Data<sqlx::PgPool>,
    _user: AuthenticatedUser,
) -> Result<HttpResponse, RegistrationError> {
    let registration_service = RegistrationService::new(pool.get_ref().clone());
    let registrations = registration_service.list_registrations().await?;

    let response = ListRegistrationsResponse {
        total: registrations.len() as i64,
        registrations,
    };

    Ok(HttpResponse::Ok().json(response))
}

/// Gets a specific registration with camp information (payment page)
pub async fn get_registration(
    pool: web::Data<sqlx::PgPool>,
    _user: AuthenticatedUser,
    path: web::Path<uuid::Uuid>,
) -> Result<HttpResponse, RegistrationError> {
    let registration_id = path.into_inner();
    let registration_service = RegistrationService::new(pool.get_ref().clone());
    let registration = registration_service
        .get_registration(&registration_id)
        .await?;

    Ok(HttpResponse::Ok().json(registration))
}

/// Lists a participant's registrations. An empty list is a valid response.
pub async fn participant_registrations(
    pool: web::Data<sqlx::PgPool>,
    _user: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, RegistrationError> {
    let email = path.into_inner();
    let registration_service = RegistrationService::new(pool.get_ref().clone());
    let registrations = registration_service
        .registrations_for_participant(&email)
        .await?;

    let response = ListRegistrationsResponse {
        total: registrations.len() as i64,
        registrations,
    };

    Ok(HttpResponse::Ok().json(response))
}

/// Lists a participant's registrations for the analytics charts. Reports
/// not-found when the participant has no registrations at all.
pub async fn participant_analytics(
    pool: web::Data<sqlx::PgPool>,
    _user: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, RegistrationError> {
    let email = path.into_inner();
    let registration_service = RegistrationService::new(pool.get_ref().clone());
    let registrations = registration_service
        .registrations_for_participant(&email)
        .await?;

    if registrations.is_empty() {
        return Err(RegistrationError::NoRegisteredCamps);
    }

    let response = ListRegistrationsResponse {
        total: registrations.len() as i64,
        registrations,
    };

    Ok(HttpResponse::Ok().json(response))
}

/// Cancels a registration while it is still unpaid
pub async fn cancel_registration(
    pool: web::Data<sqlx::PgPool>,
    _user: AuthenticatedUser,
    path: web::Path<uuid::Uuid>,
) -> Result<HttpResponse, RegistrationError> {
    let registration_id = path.into_inner();
    let registration_service = RegistrationService::new(pool.get_ref().clone());
    registration_service
        .cancel_registration(&registration_id)
        .await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Confirms a registration (organizer approval)
pub async fn confirm_registration(
    pool: web::Data<sqlx::PgPool>,
    _user: AuthenticatedUser,
    path: web::Path<uuid::Uuid>,
) -> Result<HttpResponse, RegistrationError> {
    let registration_id = path.into_inner();
    let registration_service = RegistrationService::new(pool.get_ref().clone());
    registration_service
        .confirm_registration(&registration_id)
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Participant confirmed successfully"
    })))
}

/// Updates a registration's payment status
pub async fn update_payment_status(
    pool: web::Data<sqlx::PgPool>,
    _user: AuthenticatedUser,
    path: web::Path<uuid::Uuid>,
    request: web::Json<UpdatePaymentStatusRequest>,
) -> Result<HttpResponse, RegistrationError> {
    request
        .validate()
        .map_err(|e| RegistrationError::Validation(format!("Validation error: {}", e)))?;

    let registration_id = path.into_inner();
    let registration_service = RegistrationService::new(pool.get_ref().clone());
    registration_service
        .update_payment_status(&registration_id, &request.payment_status)
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Status updated"
    })))
}
