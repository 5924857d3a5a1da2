use sqlx::PgPool;

use super::types::{AuthError, CreateUserRequest, DEFAULT_ROLE, UpdateProfileRequest, User};

/// Service for user account operations.
pub struct AuthService {
    pool: PgPool,
}

impl AuthService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates a user account on first sign-in. The role is always set to
    /// participant here; client-supplied roles are never honored. Duplicate
    /// emails report a conflict, including when two first sign-ins race.
    pub async fn create_user(&self, request: &CreateUserRequest) -> Result<User, AuthError> {
        let email = request.email.trim().to_lowercase();

        // The unique index arbitrates concurrent sign-ins for the same address.
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, name, picture, role)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (email) DO NOTHING
            RETURNING id, email, name, picture, role, created_at, updated_at
            "#,
        )
        .bind(&email)
        .bind(request.name.trim())
        .bind(&request.picture)
        .bind(DEFAULT_ROLE)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AuthError::EmailExists)?;

        Ok(user)
    }

    /// Looks up a user account by email.
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, name, picture, role, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.to_lowercase())
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Returns whether an account with the given email exists.
    pub async fn user_exists(&self, email: &str) -> Result<bool, AuthError> {
        Ok(self.get_user_by_email(email).await?.is_some())
    }

    /// Updates the profile fields of an account.
    pub async fn update_profile(
        &self,
        email: &str,
        request: &UpdateProfileRequest,
    ) -> Result<User, AuthError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET name = $1, picture = $2, updated_at = NOW()
            WHERE email = $3
            RETURNING id, email, name, picture, role, created_at, updated_at
            "#,
        )
        .bind(request.name.trim())
        .bind(&request.picture)
        .bind(email.to_lowercase())
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AuthError::UserNotFound)?;

        Ok(user)
    }

    /// Lists every user account, newest first.
    pub async fn list_users(&self) -> Result<Vec<User>, AuthError> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, name, picture, role, created_at, updated_at
            FROM users
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }
}
