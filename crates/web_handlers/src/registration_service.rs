use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::registration_types::*;

/// Service for camp registration operations
pub struct RegistrationService {
    pool: PgPool,
}

impl RegistrationService {
    /// Creates a new instance of `RegistrationService` with the provided database connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Registers a participant for a camp. New registrations always start
    /// pending and unpaid; status changes go through the dedicated endpoints.
    pub async fn create_registration(
        &self,
        participant_email: &str,
        request: &CreateRegistrationRequest,
    ) -> Result<Registration, RegistrationError> {
        let camp = sqlx::query("SELECT 1 AS one FROM camps WHERE id = $1")
            .bind(request.camp_id)
            .fetch_optional(&self.pool)
            .await?;

        if camp.is_none() {
            return Err(RegistrationError::CampNotFound);
        }

        let registration = sqlx::query_as::<_, Registration>(
            r#"
            INSERT INTO registrations (camp_id, participant_email, participant_name)
            VALUES ($1, $2, $3)
            RETURNING
                id, camp_id, participant_email, participant_name,
                confirmation_status, payment_status, created_at, updated_at
            "#,
        )
        .bind(request.camp_id)
        .bind(participant_email.to_lowercase())
        .bind(&request.participant_name)
        .fetch_one(&self.pool)
        .await?;

        Ok(registration)
    }

    /// Lists every registration with camp information for the organizer dashboard
    pub async fn list_registrations(&self) -> Result<Vec<RegistrationWithCamp>, RegistrationError> {
        let rows = sqlx::query(
            r#"
            SELECT
                r.id, r.camp_id, r.participant_email, r.participant_name,
                r.confirmation_status, r.payment_status, r.created_at,
                c.name AS camp_name, c.location AS camp_location, c.fees AS camp_fees
            FROM registrations r
            LEFT JOIN camps c ON r.camp_id = c.id
            ORDER BY r.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(registration_with_camp).collect())
    }

    /// Gets a specific registration with camp information
    pub async fn get_registration(
        &self,
        registration_id: &Uuid,
    ) -> Result<RegistrationWithCamp, RegistrationError> {
        let row = sqlx::query(
            r#"
            SELECT
                r.id, r.camp_id, r.participant_email, r.participant_name,
                r.confirmation_status, r.payment_status, r.created_at,
                c.name AS camp_name, c.location AS camp_location, c.fees AS camp_fees
            FROM registrations r
            LEFT JOIN camps c ON r.camp_id = c.id
            WHERE r.id = $1
            "#,
        )
        .bind(registration_id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(registration_with_camp(row)),
            None => Err(RegistrationError::NotFound),
        }
    }

    /// Lists a participant's registrations with camp information
    pub async fn registrations_for_participant(
        &self,
        participant_email: &str,
    ) -> Result<Vec<RegistrationWithCamp>, RegistrationError> {
        let rows = sqlx::query(
            r#"
            SELECT
                r.id, r.camp_id, r.participant_email, r.participant_name,
                r.confirmation_status, r.payment_status, r.created_at,
                c.name AS camp_name, c.location AS camp_location, c.fees AS camp_fees
            FROM registrations r
            LEFT JOIN camps c ON r.camp_id = c.id
            WHERE r.participant_email = $1
            ORDER BY r.created_at DESC
            "#,
        )
        .bind(participant_email.to_lowercase())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(registration_with_camp).collect())
    }

    /// Cancels a registration. Paid registrations must never be deleted, so
    /// the payment status is checked before the delete.
    pub async fn cancel_registration(
        &self,
        registration_id: &Uuid,
    ) -> Result<(), RegistrationError> {
        let row = sqlx::query("SELECT payment_status FROM registrations WHERE id = $1")
            .bind(registration_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RegistrationError::NotFound)?;

        let payment_status: String = row.get("payment_status");
        if payment_status == PAID_STATUS {
            return Err(RegistrationError::PaidCancellation);
        }

        let result = sqlx::query("DELETE FROM registrations WHERE id = $1")
            .bind(registration_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RegistrationError::NotFound);
        }

        Ok(())
    }

    /// Marks a registration confirmed. Confirming an already-confirmed
    /// registration succeeds and leaves the status unchanged.
    pub async fn confirm_registration(
        &self,
        registration_id: &Uuid,
    ) -> Result<(), RegistrationError> {
        let result = sqlx::query(
            "UPDATE registrations SET confirmation_status = $1, updated_at = NOW() WHERE id = $2",
        )
        .bind(CONFIRMED_STATUS)
        .bind(registration_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RegistrationError::NotFound);
        }

        Ok(())
    }

    /// Updates a registration's payment status
    pub async fn update_payment_status(
        &self,
        registration_id: &Uuid,
        payment_status: &str,
    ) -> Result<(), RegistrationError> {
        let result = sqlx::query(
            "UPDATE registrations SET payment_status = $1, updated_at = NOW() WHERE id = $2",
        )
        .bind(payment_status)
        .bind(registration_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RegistrationError::NotFound);
        }

        Ok(())
    }
}

fn registration_with_camp(row: sqlx::postgres::PgRow) -> RegistrationWithCamp {
    RegistrationWithCamp {
        id: row.get("id"),
        camp_id: row.get("camp_id"),
        camp_name: row
            .get::<Option<String>, _>("camp_name")
            .unwrap_or_else(|| "Unknown Camp".to_string()),
        camp_location: row
            .get::<Option<String>, _>("camp_location")
            .unwrap_or_default(),
        camp_fees: row.get::<Option<f64>, _>("camp_fees").unwrap_or(0.0),
        participant_email: row.get("participant_email"),
        participant_name: row.get("participant_name"),
        confirmation_status: row.get("confirmation_status"),
        payment_status: row.get("payment_status"),
        created_at: row.get("created_at"),
    }
}
