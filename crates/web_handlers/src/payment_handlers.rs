use actix_web::{HttpResponse, Result, web};
use validator::Validate;

use crate::payment_service::PaymentService;
use crate::payment_types::*;
use auth_services::middleware::AuthenticatedUser;
use stripe_api::{PaymentApiError, StripeClient};

/// Starts a card charge with the payment processor and hands the client-side
/// secret back to the browser. Nothing is persisted here; the ledger entry is
/// recorded by a separate call once the client reports success.
pub async fn create_payment_intent(
    stripe: web::Data<StripeClient>,
    _user: AuthenticatedUser,
    request: web::Json<CreatePaymentIntentRequest>,
) -> Result<HttpResponse, PaymentApiError> {
    request
        .validate()
        .map_err(|_| PaymentApiError::InvalidAmount)?;

    let intent = stripe.create_payment_intent(request.amount).await?;

    Ok(HttpResponse::Ok().json(PaymentIntentResponse {
        success: true,
        client_secret: intent.client_secret,
    }))
}

/// Records a ledger entry for a completed charge
pub async fn record_payment(
    pool: web::Data<sqlx::PgPool>,
    _user: AuthenticatedUser,
    request: web::Json<RecordPaymentRequest>,
) -> Result<HttpResponse, PaymentError> {
    request
        .validate()
        .map_err(|e| PaymentError::Validation(format!("Validation error: {}", e)))?;

    let payment_service = PaymentService::new(pool.get_ref().clone());
    let payment = payment_service.record_payment(&request).await?;

    log::info!(
        "Recorded payment {} for camp {} by {}",
        payment.transaction_id,
        payment.camp_id,
        payment.participant_email
    );

    Ok(HttpResponse::Created().json(payment))
}

/// Lists a participant's payment history. Reports not-found when the
/// participant has no ledger entries at all.
pub async fn payment_history(
    pool: web::Data<sqlx::PgPool>,
    _user: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, PaymentError> {
    let email = path.into_inner();
    let payment_service = PaymentService::new(pool.get_ref().clone());
    let payments = payment_service.payment_history(&email).await?;

    if payments.is_empty() {
        return Err(PaymentError::NoPaymentsFound);
    }

    let response = ListPaymentsResponse {
        total: payments.len() as i64,
        payments,
    };

    Ok(HttpResponse::Ok().json(response))
}
