//! Service layer error types
//!
//! Every variant except `Internal` carries the reply shown to the user.

use linkrepo_core::DomainError;
use thiserror::Error;

/// Coarse classification of a usecase failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller is not a registered user
    Unauthorized,
    /// Conflicts, missing resources and malformed input
    BadRequest,
    /// Storage or other infrastructure failure
    Internal,
}

/// Service layer error type
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("user not registered!")]
    NotRegistered,

    #[error("already registered!")]
    AlreadyRegistered,

    #[error("directory already created!")]
    DirectoryExists,

    #[error("directory not found!")]
    DirectoryNotFound,

    #[error("link title already used!")]
    LinkTitleTaken,

    #[error("link not found!")]
    LinkNotFound,

    #[error("invalid url!")]
    InvalidUrl,

    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Get the kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotRegistered => ErrorKind::Unauthorized,
            Self::Internal(_) => ErrorKind::Internal,
            _ => ErrorKind::BadRequest,
        }
    }

    /// Get the error code for logs
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotRegistered => "NOT_REGISTERED",
            Self::AlreadyRegistered => "ALREADY_REGISTERED",
            Self::DirectoryExists => "DIRECTORY_EXISTS",
            Self::DirectoryNotFound => "DIRECTORY_NOT_FOUND",
            Self::LinkTitleTaken => "LINK_TITLE_TAKEN",
            Self::LinkNotFound => "LINK_NOT_FOUND",
            Self::InvalidUrl => "INVALID_URL",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::PhoneNumberTaken => Self::AlreadyRegistered,
            DomainError::DirectoryTitleTaken => Self::DirectoryExists,
            DomainError::LinkTitleTaken => Self::LinkTitleTaken,
            other => Self::Internal(other.to_string()),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
