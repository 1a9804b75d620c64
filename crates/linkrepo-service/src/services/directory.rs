//! Directory service
//!
//! Handles creation, listing, renaming and cascading deletion of directories.

use linkrepo_core::entities::Directory;
use linkrepo_core::traits::within_transaction;
use tracing::{info, instrument};

use super::access::{resolve_owned_directory, resolve_user};
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Directory service
pub struct DirectoryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DirectoryService<'a> {
    /// Create a new DirectoryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a directory for the caller
    #[instrument(skip(self))]
    pub async fn add(&self, phone_number: &str, title: &str) -> ServiceResult<Directory> {
        let user = resolve_user(self.ctx, phone_number).await?;

        if self
            .ctx
            .directory_repo()
            .get_by_title(user.id, title)
            .await?
            .is_some()
        {
            return Err(ServiceError::DirectoryExists);
        }

        let directory = self.ctx.directory_repo().save(user.id, title).await?;

        info!(directory_id = %directory.id, user_id = %user.id, "Directory created");

        Ok(directory)
    }

    /// List the caller's live directories
    #[instrument(skip(self))]
    pub async fn list(&self, phone_number: &str) -> ServiceResult<Vec<Directory>> {
        let user = resolve_user(self.ctx, phone_number).await?;

        Ok(self.ctx.directory_repo().get_all(user.id).await?)
    }

    /// Soft delete a directory together with all of its links
    ///
    /// Both updates share one transaction: a failing link cascade leaves the
    /// directory untouched.
    #[instrument(skip(self))]
    pub async fn delete(&self, phone_number: &str, title: &str) -> ServiceResult<()> {
        let user = resolve_user(self.ctx, phone_number).await?;
        let directory = resolve_owned_directory(self.ctx, &user, title).await?;

        let removed_links = within_transaction(self.ctx.transactor(), |uow| {
            Box::pin(async move {
                uow.directories()
                    .soft_delete_by_title(directory.user_id, &directory.title)
                    .await?;
                let removed = uow
                    .links()
                    .soft_batch_delete_by_directory(directory.id)
                    .await?;
                Ok::<_, ServiceError>(removed)
            })
        })
        .await?;

        info!(user_id = %user.id, removed_links, "Directory deleted");

        Ok(())
    }

    /// Rename a directory
    ///
    /// Renaming to the current title performs no write.
    #[instrument(skip(self))]
    pub async fn update(
        &self,
        phone_number: &str,
        title: &str,
        new_title: &str,
    ) -> ServiceResult<()> {
        let user = resolve_user(self.ctx, phone_number).await?;
        let directory = resolve_owned_directory(self.ctx, &user, title).await?;

        if directory.title == new_title {
            return Ok(());
        }

        if self
            .ctx
            .directory_repo()
            .get_by_title(user.id, new_title)
            .await?
            .is_some()
        {
            return Err(ServiceError::DirectoryExists);
        }

        self.ctx.directory_repo().update(&directory, new_title).await?;

        info!(directory_id = %directory.id, "Directory renamed");

        Ok(())
    }
}
