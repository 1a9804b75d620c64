//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
///
/// Storage failures carry a short context phrase only; the driver error itself
/// is logged where it happens and never travels past the repository.
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Conflict Errors (unique index violations)
    // =========================================================================
    #[error("Phone number already registered")]
    PhoneNumberTaken,

    #[error("Directory title already used")]
    DirectoryTitleTaken,

    #[error("Link title already used in directory")]
    LinkTitleTaken,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Transaction already finished")]
    TransactionClosed,

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Create a database error from a context phrase
    pub fn database(context: impl Into<String>) -> Self {
        Self::DatabaseError(context.into())
    }

    /// Get an error code string for logs
    pub fn code(&self) -> &'static str {
        match self {
            Self::PhoneNumberTaken => "PHONE_NUMBER_TAKEN",
            Self::DirectoryTitleTaken => "DIRECTORY_TITLE_TAKEN",
            Self::LinkTitleTaken => "LINK_TITLE_TAKEN",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::TransactionClosed => "TRANSACTION_CLOSED",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::PhoneNumberTaken | Self::DirectoryTitleTaken | Self::LinkTitleTaken
        )
    }
}
