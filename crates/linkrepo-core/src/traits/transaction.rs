//! Transaction coordinator
//!
//! A [`Transactor`] opens a [`UnitOfWork`] whose repositories all run on the
//! same database transaction. [`within_transaction`] wraps the
//! begin/commit/rollback envelope around a closure.

use async_trait::async_trait;
use futures::future::BoxFuture;
use tracing::warn;

use super::repositories::{DirectoryRepository, LinkRepository, RepoResult};
use crate::error::DomainError;

/// Repositories bound to one open transaction
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Directory repository running inside the transaction
    fn directories(&self) -> &dyn DirectoryRepository;

    /// Link repository running inside the transaction
    fn links(&self) -> &dyn LinkRepository;

    /// Commit all changes
    async fn commit(self: Box<Self>) -> RepoResult<()>;

    /// Discard all changes
    async fn rollback(self: Box<Self>) -> RepoResult<()>;
}

/// Opens units of work
#[async_trait]
pub trait Transactor: Send + Sync {
    /// Begin a new transaction
    async fn begin(&self) -> RepoResult<Box<dyn UnitOfWork>>;
}

/// Run `work` inside a transaction
///
/// Commits when `work` succeeds. When it fails the transaction is rolled back
/// and the original error is returned unchanged; a failing rollback is only
/// logged.
pub async fn within_transaction<T, E, F>(transactor: &dyn Transactor, work: F) -> Result<T, E>
where
    E: From<DomainError>,
    F: for<'u> FnOnce(&'u dyn UnitOfWork) -> BoxFuture<'u, Result<T, E>> + Send,
{
    let uow = transactor.begin().await?;
    let result = work(uow.as_ref()).await;

    match result {
        Ok(value) => {
            uow.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = uow.rollback().await {
                warn!(error = %rollback_err, "Rollback failed");
            }
            Err(err)
        }
    }
}
