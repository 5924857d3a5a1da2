use actix_web::{HttpResponse, Result, web};
use validator::Validate;

use crate::feedback_service::FeedbackService;
use crate::feedback_types::*;
use auth_services::middleware::AuthenticatedUser;

/// Lists every feedback entry for the landing page
pub async fn list_feedback(pool: web::Data<sqlx::PgPool>) -> Result<HttpResponse, FeedbackError> {
    let feedback_service = FeedbackService::new(pool.get_ref().clone());
    let feedback = feedback_service.list_feedback().await?;

    let response = ListFeedbackResponse {
        total: feedback.len() as i64,
        feedback,
    };

    Ok(HttpResponse::Ok().json(response))
}

/// Submits feedback for an attended camp
pub async fn submit_feedback(
    pool: web::Data<sqlx::PgPool>,
    user: AuthenticatedUser,
    request: web::Json<SubmitFeedbackRequest>,
) -> Result<HttpResponse, FeedbackError> {
    request
        .validate()
        .map_err(|e| FeedbackError::Validation(format!("Validation error: {}", e)))?;

    let feedback_service = FeedbackService::new(pool.get_ref().clone());
    let feedback = feedback_service
        .submit_feedback(&user.0.email, &request)
        .await?;

    Ok(HttpResponse::Created().json(feedback))
}

/// Lists the feedback entries a participant has written
pub async fn participant_feedback(
    pool: web::Data<sqlx::PgPool>,
    _user: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, FeedbackError> {
    let email = path.into_inner();
    let feedback_service = FeedbackService::new(pool.get_ref().clone());
    let feedback = feedback_service.feedback_for_participant(&email).await?;

    let response = ListFeedbackResponse {
        total: feedback.len() as i64,
        feedback,
    };

    Ok(HttpResponse::Ok().json(response))
}

/// Deletes a feedback entry (organizer moderation)
pub async fn delete_feedback(
    pool: web::Data<sqlx::PgPool>,
    _user: AuthenticatedUser,
    path: web::Path<uuid::Uuid>,
) -> Result<HttpResponse, FeedbackError> {
    let feedback_id = path.into_inner();
    let feedback_service = FeedbackService::new(pool.get_ref().clone());
    feedback_service.delete_feedback(&feedback_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
