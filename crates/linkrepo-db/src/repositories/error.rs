//! Error handling utilities for repositories
//!
//! Driver errors are logged here and replaced by a fixed context phrase so
//! nothing about the storage layer leaks to callers.

use linkrepo_core::error::DomainError;
use sqlx::Error as SqlxError;
use tracing::error;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError, context: &'static str) -> DomainError {
    error!(error = %e, context, "Database operation failed");
    DomainError::database(context)
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, context: &'static str, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    map_db_error(e, context)
}
