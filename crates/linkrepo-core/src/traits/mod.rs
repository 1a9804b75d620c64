//! Ports implemented by the infrastructure layer

mod repositories;
mod transaction;

pub use repositories::{DirectoryRepository, LinkRepository, RepoResult, UserRepository};
pub use transaction::{within_transaction, Transactor, UnitOfWork};
