use actix_web::{HttpResponse, Result, web};
use validator::Validate;

use crate::camp_service::CampService;
use crate::camp_types::*;
use auth_services::middleware::AuthenticatedUser;

/// Lists all camps for the public browse page
pub async fn list_camps(pool: web::Data<sqlx::PgPool>) -> Result<HttpResponse, CampError> {
    let camp_service = CampService::new(pool.get_ref().clone());
    let camps = camp_service.list_camps().await?;

    let response = ListCampsResponse {
        total: camps.len() as i64,
        camps,
    };

    Ok(HttpResponse::Ok().json(response))
}

/// Lists the six most popular camps for the landing page
pub async fn popular_camps(pool: web::Data<sqlx::PgPool>) -> Result<HttpResponse, CampError> {
    let camp_service = CampService::new(pool.get_ref().clone());
    let camps = camp_service.popular_camps().await?;

    let response = ListCampsResponse {
        total: camps.len() as i64,
        camps,
    };

    Ok(HttpResponse::Ok().json(response))
}

/// Lists the three most recently added camps for the upcoming-events section
pub async fn upcoming_camps(pool: web::Data<sqlx::PgPool>) -> Result<HttpResponse, CampError> {
    let camp_service = CampService::new(pool.get_ref().clone());
    let camps = camp_service.upcoming_camps().await?;

    let response = ListCampsResponse {
        total: camps.len() as i64,
        camps,
    };

    Ok(HttpResponse::Ok().json(response))
}

/// Gets a specific camp by ID
pub async fn get_camp(
    pool: web::Data<sqlx::PgPool>,
    path: web::Path<uuid::Uuid>,
) -> Result<HttpResponse, CampError> {
    let camp_id = path.into_inner();
    let camp_service = CampService::new(pool.get_ref().clone());
    let camp = camp_service.get_camp(&camp_id).await?;

    Ok(HttpResponse::Ok().json(camp))
}

/// Lists all camps for the organizer dashboard
pub async fn manage_camps(
    pool: web::Data<sqlx::PgPool>,
    _user: AuthenticatedUser,
) -> Result<HttpResponse, CampError> {
    let camp_service = CampService::new(pool.get_ref().clone());
    let camps = camp_service.list_camps().await?;

    let response = ListCampsResponse {
        total: camps.len() as i64,
        camps,
    };

    Ok(HttpResponse::Ok().json(response))
}

/// Creates a new camp
pub async fn create_camp(
    pool: web::Data<sqlx::PgPool>,
    _user: AuthenticatedUser,
    request: web::Json<CreateCampRequest>,
) -> Result<HttpResponse, CampError> {
    request
        .validate()
        .map_err(|e| CampError::Validation(format!("Validation error: {}", e)))?;

    let camp_service = CampService::new(pool.get_ref().clone());
    let camp = camp_service.create_camp(&request).await?;

    Ok(HttpResponse::Created().json(CreateCampResponse {
        inserted_id: camp.id,
    }))
}

/// Updates a camp's organizer-set fields
pub async fn update_camp(
    pool: web::Data<sqlx::PgPool>,
    _user: AuthenticatedUser,
    path: web::Path<uuid::Uuid>,
    request: web::Json<UpdateCampRequest>,
) -> Result<HttpResponse, CampError> {
    request
        .validate()
        .map_err(|e| CampError::Validation(format!("Validation error: {}", e)))?;

    let camp_id = path.into_inner();
    let camp_service = CampService::new(pool.get_ref().clone());
    let updated_camp = camp_service.update_camp(&camp_id, &request).await?;

    Ok(HttpResponse::Ok().json(updated_camp))
}

/// Deletes a camp
pub async fn delete_camp(
    pool: web::Data<sqlx::PgPool>,
    _user: AuthenticatedUser,
    path: web::Path<uuid::Uuid>,
) -> Result<HttpResponse, CampError> {
    let camp_id = path.into_inner();
    let camp_service = CampService::new(pool.get_ref().clone());
    camp_service.delete_camp(&camp_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Increments a camp's participant count. Called by the client after a join.
pub async fn increment_participant_count(
    pool: web::Data<sqlx::PgPool>,
    _user: AuthenticatedUser,
    path: web::Path<uuid::Uuid>,
) -> Result<HttpResponse, CampError> {
    let camp_id = path.into_inner();
    let camp_service = CampService::new(pool.get_ref().clone());
    camp_service.increment_participant_count(&camp_id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Participant count incremented"
    })))
}
