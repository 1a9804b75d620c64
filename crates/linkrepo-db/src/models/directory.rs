//! Directory database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for directories table
#[derive(Debug, Clone, FromRow)]
pub struct DirectoryModel {
    pub id: i64,
    pub id_user: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}
