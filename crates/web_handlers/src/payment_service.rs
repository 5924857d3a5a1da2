use sqlx::{PgPool, Row};

use crate::payment_types::*;

/// Service for the append-only payment ledger
pub struct PaymentService {
    pool: PgPool,
}

impl PaymentService {
    /// Creates a new instance of `PaymentService` with the provided database connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Records a ledger entry for a charge the client reported as successful
    pub async fn record_payment(
        &self,
        request: &RecordPaymentRequest,
    ) -> Result<PaymentWithCamp, PaymentError> {
        let camp = sqlx::query("SELECT name FROM camps WHERE id = $1")
            .bind(request.camp_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(PaymentError::CampNotFound)?;

        let camp_name: String = camp.get("name");

        let row = sqlx::query(
            r#"
            INSERT INTO payments (camp_id, participant_email, amount, transaction_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, camp_id, participant_email, amount, transaction_id, created_at
            "#,
        )
        .bind(request.camp_id)
        .bind(request.participant_email.to_lowercase())
        .bind(request.amount)
        .bind(&request.transaction_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(PaymentWithCamp {
            id: row.get("id"),
            camp_id: row.get("camp_id"),
            camp_name,
            participant_email: row.get("participant_email"),
            amount: row.get("amount"),
            transaction_id: row.get("transaction_id"),
            created_at: row.get("created_at"),
        })
    }

    /// Lists a participant's ledger entries, newest first
    pub async fn payment_history(
        &self,
        participant_email: &str,
    ) -> Result<Vec<PaymentWithCamp>, PaymentError> {
        let rows = sqlx::query(
            r#"
            SELECT
                p.id, p.camp_id, p.participant_email, p.amount,
                p.transaction_id, p.created_at,
                c.name AS camp_name
            FROM payments p
            LEFT JOIN camps c ON p.camp_id = c.id
            WHERE p.participant_email = $1
            ORDER BY p.created_at DESC
            "#,
        )
        .bind(participant_email.to_lowercase())
        .fetch_all(&self.pool)
        .await?;

        let payments = rows
            .into_iter()
            .map(|row| PaymentWithCamp {
                id: row.get("id"),
                camp_id: row.get("camp_id"),
                camp_name: row
                    .get::<Option<String>, _>("camp_name")
                    .unwrap_or_else(|| "Unknown Camp".to_string()),
                participant_email: row.get("participant_email"),
                amount: row.get("amount"),
                transaction_id: row.get("transaction_id"),
                created_at: row.get("created_at"),
            })
            .collect();

        Ok(payments)
    }
}
