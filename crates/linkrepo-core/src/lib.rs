//! # linkrepo-core
//!
//! Domain layer containing entities, id value objects, repository traits and
//! the transaction contract.
//! This crate has zero dependencies on infrastructure (database, chat transport, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Directory, Link, LinkChange, NewLink, User};
pub use error::DomainError;
pub use traits::{
    within_transaction, DirectoryRepository, LinkRepository, RepoResult, Transactor, UnitOfWork,
    UserRepository,
};
pub use value_objects::{DirectoryId, IdParseError, LinkId, UserId};
