use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::users::models::User;

/// Service for resolving inbound email to a user account.
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// True iff the code exists in the reference table and is bound to a user.
    ///
    /// The inner join means a code row whose `user_id` points at a deleted
    /// user does not count as bound.
    pub async fn reference_is_bound(&self, code: &str) -> Result<bool> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM users u
            INNER JOIN reference_codes r ON u.id = r.user_id
            WHERE r.code = $1
            "#,
        )
        .bind(code)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(count > 0)
    }

    /// Resolve a reference code to the user it is bound to.
    ///
    /// This is the canonical resolution path: existence and binding are
    /// checked in one query.
    pub async fn find_by_reference(&self, code: &str) -> Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT u.id, u.name, u.email, u.phone_number, u.created_at
            FROM users u
            INNER JOIN reference_codes r ON u.id = r.user_id
            WHERE r.code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    /// Resolve a user by email address.
    ///
    /// Compatibility path for deployments still running in sender-email
    /// resolution mode; performs no reference-binding check.
    pub async fn find_by_email(&self, address: &str) -> Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, phone_number, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(address)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)
    }
}
