use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for a user account.
///
/// Read-only from this service's perspective.
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// E.164 phone number the SMS confirmation is sent to.
    pub phone_number: String,
    pub created_at: DateTime<Utc>,
}
