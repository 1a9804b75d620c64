//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Every read skips soft-deleted rows.

use async_trait::async_trait;

use crate::entities::{Directory, Link, NewLink, User};
use crate::error::DomainError;
use crate::value_objects::{DirectoryId, LinkId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new user
    async fn save(&self, phone_number: &str) -> RepoResult<User>;

    /// Find user by phone number
    async fn get_by_phone_number(&self, phone_number: &str) -> RepoResult<Option<User>>;
}

// ============================================================================
// Directory Repository
// ============================================================================

#[async_trait]
pub trait DirectoryRepository: Send + Sync {
    /// Create a new directory for a user
    async fn save(&self, user_id: UserId, title: &str) -> RepoResult<Directory>;

    /// Find a user's directory by title
    async fn get_by_title(&self, user_id: UserId, title: &str) -> RepoResult<Option<Directory>>;

    /// Find directory by ID
    async fn get_by_id(&self, id: DirectoryId) -> RepoResult<Option<Directory>>;

    /// List all directories of a user
    async fn get_all(&self, user_id: UserId) -> RepoResult<Vec<Directory>>;

    /// Soft delete a user's directory by title
    async fn soft_delete_by_title(&self, user_id: UserId, title: &str) -> RepoResult<()>;

    /// Rename a directory
    async fn update(&self, directory: &Directory, new_title: &str) -> RepoResult<()>;
}

// ============================================================================
// Link Repository
// ============================================================================

#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Create a new link inside a directory
    async fn save(&self, directory_id: DirectoryId, link: &NewLink) -> RepoResult<Link>;

    /// Find a link by title inside a directory
    async fn get_by_title(&self, directory_id: DirectoryId, title: &str) -> RepoResult<Option<Link>>;

    /// Find link by ID
    async fn get_by_id(&self, id: LinkId) -> RepoResult<Option<Link>>;

    /// List all links of a directory
    async fn get_all(&self, directory_id: DirectoryId) -> RepoResult<Vec<Link>>;

    /// Soft delete a link
    async fn soft_delete_by_id(&self, id: LinkId) -> RepoResult<()>;

    /// Persist url and title of an existing link
    async fn update(&self, link: &Link) -> RepoResult<()>;

    /// Soft delete every link of a directory
    async fn soft_batch_delete_by_directory(&self, directory_id: DirectoryId) -> RepoResult<u64>;
}
