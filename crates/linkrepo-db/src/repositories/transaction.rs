//! PostgreSQL transaction coordinator

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;
use tokio::sync::Mutex;
use tracing::{debug, instrument};

use linkrepo_core::error::DomainError;
use linkrepo_core::traits::{
    DirectoryRepository, LinkRepository, RepoResult, Transactor, UnitOfWork,
};

use crate::pool::{DbHandle, SharedTransaction};

use super::directory::PgDirectoryRepository;
use super::error::map_db_error;
use super::link::PgLinkRepository;

/// Opens PostgreSQL transactions on the shared pool
#[derive(Clone)]
pub struct PgTransactor {
    pool: PgPool,
}

impl PgTransactor {
    /// Create a new PgTransactor
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Transactor for PgTransactor {
    #[instrument(skip(self))]
    async fn begin(&self) -> RepoResult<Box<dyn UnitOfWork>> {
        let tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_db_error(e, "error beginning transaction"))?;
        debug!("Transaction started");

        Ok(Box::new(PgUnitOfWork::new(Arc::new(Mutex::new(Some(tx))))))
    }
}

/// Directory and link repositories sharing one open transaction
pub struct PgUnitOfWork {
    tx: SharedTransaction,
    directories: PgDirectoryRepository,
    links: PgLinkRepository,
}

impl PgUnitOfWork {
    fn new(tx: SharedTransaction) -> Self {
        let handle = DbHandle::Transaction(Arc::clone(&tx));
        Self {
            directories: PgDirectoryRepository::with_handle(handle.clone()),
            links: PgLinkRepository::with_handle(handle),
            tx,
        }
    }
}

#[async_trait]
impl UnitOfWork for PgUnitOfWork {
    fn directories(&self) -> &dyn DirectoryRepository {
        &self.directories
    }

    fn links(&self) -> &dyn LinkRepository {
        &self.links
    }

    async fn commit(self: Box<Self>) -> RepoResult<()> {
        let tx = self.tx.lock().await.take().ok_or(DomainError::TransactionClosed)?;
        tx.commit()
            .await
            .map_err(|e| map_db_error(e, "error committing transaction"))?;
        debug!("Transaction committed");
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> RepoResult<()> {
        let tx = self.tx.lock().await.take().ok_or(DomainError::TransactionClosed)?;
        tx.rollback()
            .await
            .map_err(|e| map_db_error(e, "error rolling back transaction"))?;
        debug!("Transaction rolled back");
        Ok(())
    }
}
