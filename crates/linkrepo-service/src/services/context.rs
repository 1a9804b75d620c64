//! Service context - dependency container for services
//!
//! Holds the repositories and the transaction coordinator needed by services.

use std::sync::Arc;

use linkrepo_core::traits::{DirectoryRepository, LinkRepository, Transactor, UserRepository};
use linkrepo_db::{
    PgDirectoryRepository, PgLinkRepository, PgPool, PgTransactor, PgUserRepository,
};

/// Service context containing all dependencies
///
/// Cloning is cheap; every dependency sits behind an `Arc`.
#[derive(Clone)]
pub struct ServiceContext {
    user_repo: Arc<dyn UserRepository>,
    directory_repo: Arc<dyn DirectoryRepository>,
    link_repo: Arc<dyn LinkRepository>,
    transactor: Arc<dyn Transactor>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        directory_repo: Arc<dyn DirectoryRepository>,
        link_repo: Arc<dyn LinkRepository>,
        transactor: Arc<dyn Transactor>,
    ) -> Self {
        Self {
            user_repo,
            directory_repo,
            link_repo,
            transactor,
        }
    }

    /// Wire the PostgreSQL repositories onto one shared pool
    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PgUserRepository::new(pool.clone())),
            Arc::new(PgDirectoryRepository::new(pool.clone())),
            Arc::new(PgLinkRepository::new(pool.clone())),
            Arc::new(PgTransactor::new(pool)),
        )
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the directory repository
    pub fn directory_repo(&self) -> &dyn DirectoryRepository {
        self.directory_repo.as_ref()
    }

    /// Get the link repository
    pub fn link_repo(&self) -> &dyn LinkRepository {
        self.link_repo.as_ref()
    }

    /// Get the transaction coordinator
    pub fn transactor(&self) -> &dyn Transactor {
        self.transactor.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("transactor", &"...")
            .finish()
    }
}
