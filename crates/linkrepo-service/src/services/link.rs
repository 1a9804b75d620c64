//! Link service
//!
//! Handles links inside the caller's directories.

use linkrepo_core::entities::{Link, LinkChange, NewLink};
use linkrepo_core::value_objects::LinkId;
use tracing::{debug, info, instrument};

use crate::validator::is_url;

use super::access::{resolve_owned_directory, resolve_owned_link, resolve_user};
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Link service
pub struct LinkService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LinkService<'a> {
    /// Create a new LinkService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List the live links of one of the caller's directories
    #[instrument(skip(self))]
    pub async fn list(&self, phone_number: &str, directory_title: &str) -> ServiceResult<Vec<Link>> {
        let user = resolve_user(self.ctx, phone_number).await?;
        let directory = resolve_owned_directory(self.ctx, &user, directory_title).await?;

        Ok(self.ctx.link_repo().get_all(directory.id).await?)
    }

    /// Save a link into one of the caller's directories
    #[instrument(skip(self, link), fields(title = %link.title))]
    pub async fn save(
        &self,
        phone_number: &str,
        directory_title: &str,
        link: NewLink,
    ) -> ServiceResult<Link> {
        if !is_url(&link.url) {
            return Err(ServiceError::InvalidUrl);
        }

        let user = resolve_user(self.ctx, phone_number).await?;
        let directory = resolve_owned_directory(self.ctx, &user, directory_title).await?;

        if self
            .ctx
            .link_repo()
            .get_by_title(directory.id, &link.title)
            .await?
            .is_some()
        {
            return Err(ServiceError::LinkTitleTaken);
        }

        let saved = self.ctx.link_repo().save(directory.id, &link).await?;

        info!(link_id = %saved.id, directory_id = %directory.id, "Link saved");

        Ok(saved)
    }

    /// Soft delete a link owned by the caller
    #[instrument(skip(self))]
    pub async fn delete(&self, phone_number: &str, link_id: LinkId) -> ServiceResult<()> {
        let user = resolve_user(self.ctx, phone_number).await?;
        let link = resolve_owned_link(self.ctx, &user, link_id).await?;

        self.ctx.link_repo().soft_delete_by_id(link.id).await?;

        info!(link_id = %link.id, "Link deleted");

        Ok(())
    }

    /// Change the url and/or title of a link owned by the caller
    #[instrument(skip(self))]
    pub async fn update(
        &self,
        phone_number: &str,
        link_id: LinkId,
        change: LinkChange,
    ) -> ServiceResult<()> {
        if change.url.as_deref().is_some_and(|url| !is_url(url)) {
            return Err(ServiceError::InvalidUrl);
        }

        let user = resolve_user(self.ctx, phone_number).await?;
        let mut link = resolve_owned_link(self.ctx, &user, link_id).await?;

        if let Some(title) = change.title.as_deref().filter(|t| *t != link.title) {
            if self
                .ctx
                .link_repo()
                .get_by_title(link.directory_id, title)
                .await?
                .is_some()
            {
                return Err(ServiceError::LinkTitleTaken);
            }
        }

        if !link.apply(&change) {
            debug!(link_id = %link.id, "Nothing to update");
            return Ok(());
        }
        self.ctx.link_repo().update(&link).await?;

        info!(link_id = %link.id, "Link updated");

        Ok(())
    }
}
