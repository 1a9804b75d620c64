//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in linkrepo-core.
//! Each repository handles database operations for a specific domain entity.

mod directory;
mod error;
mod link;
mod transaction;
mod user;

pub use directory::PgDirectoryRepository;
pub use link::PgLinkRepository;
pub use transaction::{PgTransactor, PgUnitOfWork};
pub use user::PgUserRepository;
