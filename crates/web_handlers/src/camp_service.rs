use sqlx::PgPool;
use uuid::Uuid;

use crate::camp_types::*;

/// Service for camp operations
pub struct CampService {
    pool: PgPool,
}

const CAMP_COLUMNS: &str = "id, name, location, starts_at, healthcare_professional, \
     description, image_url, fees, participant_count, created_at, updated_at";

impl CampService {
    /// Creates a new instance of `CampService` with the provided database connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates a new camp
    pub async fn create_camp(&self, request: &CreateCampRequest) -> Result<Camp, CampError> {
        let camp = sqlx::query_as::<_, Camp>(&format!(
            r#"
            INSERT INTO camps (
                name, location, starts_at, healthcare_professional,
                description, image_url, fees
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {CAMP_COLUMNS}
            "#
        ))
        .bind(request.name.trim())
        .bind(request.location.trim())
        .bind(request.starts_at)
        .bind(&request.healthcare_professional)
        .bind(&request.description)
        .bind(&request.image_url)
        .bind(request.fees)
        .fetch_one(&self.pool)
        .await?;

        Ok(camp)
    }

    /// Lists every camp, newest first
    pub async fn list_camps(&self) -> Result<Vec<Camp>, CampError> {
        let camps = sqlx::query_as::<_, Camp>(&format!(
            "SELECT {CAMP_COLUMNS} FROM camps ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(camps)
    }

    /// Lists the six camps with the most participants
    pub async fn popular_camps(&self) -> Result<Vec<Camp>, CampError> {
        let camps = sqlx::query_as::<_, Camp>(&format!(
            "SELECT {CAMP_COLUMNS} FROM camps ORDER BY participant_count DESC LIMIT 6"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(camps)
    }

    /// Lists the three most recently added camps
    pub async fn upcoming_camps(&self) -> Result<Vec<Camp>, CampError> {
        let camps = sqlx::query_as::<_, Camp>(&format!(
            "SELECT {CAMP_COLUMNS} FROM camps ORDER BY created_at DESC LIMIT 3"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(camps)
    }

    /// Gets a specific camp by ID
    pub async fn get_camp(&self, camp_id: &Uuid) -> Result<Camp, CampError> {
        let camp = sqlx::query_as::<_, Camp>(&format!(
            "SELECT {CAMP_COLUMNS} FROM camps WHERE id = $1"
        ))
        .bind(camp_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(CampError::NotFound)?;

        Ok(camp)
    }

    /// Updates a camp's organizer-set fields
    pub async fn update_camp(
        &self,
        camp_id: &Uuid,
        request: &UpdateCampRequest,
    ) -> Result<Camp, CampError> {
        let camp = sqlx::query_as::<_, Camp>(&format!(
            r#"
            UPDATE camps
            SET name = $1, location = $2, starts_at = $3, healthcare_professional = $4,
                description = $5, image_url = $6, fees = $7, updated_at = NOW()
            WHERE id = $8
            RETURNING {CAMP_COLUMNS}
            "#
        ))
        .bind(request.name.trim())
        .bind(request.location.trim())
        .bind(request.starts_at)
        .bind(&request.healthcare_professional)
        .bind(&request.description)
        .bind(&request.image_url)
        .bind(request.fees)
        .bind(camp_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(CampError::NotFound)?;

        Ok(camp)
    }

    /// Deletes a camp
    pub async fn delete_camp(&self, camp_id: &Uuid) -> Result<(), CampError> {
        let result = sqlx::query("DELETE FROM camps WHERE id = $1")
            .bind(camp_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(CampError::NotFound);
        }

        Ok(())
    }

    /// Increments a camp's participant count by one. There is no decrement path.
    pub async fn increment_participant_count(&self, camp_id: &Uuid) -> Result<(), CampError> {
        let result = sqlx::query(
            "UPDATE camps SET participant_count = participant_count + 1, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(camp_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(CampError::NotFound);
        }

        Ok(())
    }
}
