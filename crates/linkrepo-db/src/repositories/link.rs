//! PostgreSQL implementation of LinkRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use linkrepo_core::entities::{Link, NewLink};
use linkrepo_core::error::DomainError;
use linkrepo_core::traits::{LinkRepository, RepoResult};
use linkrepo_core::value_objects::{DirectoryId, LinkId};

use crate::models::LinkModel;
use crate::pool::DbHandle;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of LinkRepository
#[derive(Clone)]
pub struct PgLinkRepository {
    db: DbHandle,
}

impl PgLinkRepository {
    /// Create a new PgLinkRepository
    pub fn new(pool: PgPool) -> Self {
        Self { db: pool.into() }
    }

    /// Create a repository bound to an existing handle (pool or transaction)
    pub fn with_handle(db: DbHandle) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    #[instrument(skip(self, link), fields(title = %link.title))]
    async fn save(&self, directory_id: DirectoryId, link: &NewLink) -> RepoResult<Link> {
        let model = self
            .db
            .fetch_one(
                sqlx::query_as::<_, LinkModel>(
                    r"
                    INSERT INTO links (url, title, id_directory)
                    VALUES ($1, $2, $3)
                    RETURNING id, id_directory, url, title, created_at, updated_at, deleted_at
                    ",
                )
                .bind(&link.url)
                .bind(&link.title)
                .bind(directory_id.into_inner()),
            )
            .await
            .map_err(|e| {
                map_unique_violation(e, "error creating link", || DomainError::LinkTitleTaken)
            })?;

        Ok(Link::from(model))
    }

    #[instrument(skip(self))]
    async fn get_by_title(&self, directory_id: DirectoryId, title: &str) -> RepoResult<Option<Link>> {
        let result = self
            .db
            .fetch_optional(
                sqlx::query_as::<_, LinkModel>(
                    r"
                    SELECT id, id_directory, url, title, created_at, updated_at, deleted_at
                    FROM links
                    WHERE id_directory = $1 AND title = $2 AND deleted_at IS NULL
                    ",
                )
                .bind(directory_id.into_inner())
                .bind(title),
            )
            .await
            .map_err(|e| map_db_error(e, "error get link"))?;

        Ok(result.map(Link::from))
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: LinkId) -> RepoResult<Option<Link>> {
        let result = self
            .db
            .fetch_optional(
                sqlx::query_as::<_, LinkModel>(
                    r"
                    SELECT id, id_directory, url, title, created_at, updated_at, deleted_at
                    FROM links
                    WHERE id = $1 AND deleted_at IS NULL
                    ",
                )
                .bind(id.into_inner()),
            )
            .await
            .map_err(|e| map_db_error(e, "error get link"))?;

        Ok(result.map(Link::from))
    }

    #[instrument(skip(self))]
    async fn get_all(&self, directory_id: DirectoryId) -> RepoResult<Vec<Link>> {
        let results = self
            .db
            .fetch_all(
                sqlx::query_as::<_, LinkModel>(
                    r"
                    SELECT id, id_directory, url, title, created_at, updated_at, deleted_at
                    FROM links
                    WHERE id_directory = $1 AND deleted_at IS NULL
                    ORDER BY id
                    ",
                )
                .bind(directory_id.into_inner()),
            )
            .await
            .map_err(|e| map_db_error(e, "error get links"))?;

        Ok(results.into_iter().map(Link::from).collect())
    }

    #[instrument(skip(self))]
    async fn soft_delete_by_id(&self, id: LinkId) -> RepoResult<()> {
        self.db
            .execute(
                sqlx::query(
                    r"
                    UPDATE links
                    SET deleted_at = NOW()
                    WHERE id = $1 AND deleted_at IS NULL
                    ",
                )
                .bind(id.into_inner()),
            )
            .await
            .map_err(|e| map_db_error(e, "error soft delete link"))?;

        Ok(())
    }

    #[instrument(skip(self, link), fields(link_id = %link.id))]
    async fn update(&self, link: &Link) -> RepoResult<()> {
        self.db
            .execute(
                sqlx::query(
                    r"
                    UPDATE links
                    SET url = $2, title = $3, updated_at = NOW()
                    WHERE id = $1 AND deleted_at IS NULL
                    ",
                )
                .bind(link.id.into_inner())
                .bind(&link.url)
                .bind(&link.title),
            )
            .await
            .map_err(|e| {
                map_unique_violation(e, "error updating link", || DomainError::LinkTitleTaken)
            })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn soft_batch_delete_by_directory(&self, directory_id: DirectoryId) -> RepoResult<u64> {
        let result = self
            .db
            .execute(
                sqlx::query(
                    r"
                    UPDATE links
                    SET deleted_at = NOW()
                    WHERE id_directory = $1 AND deleted_at IS NULL
                    ",
                )
                .bind(directory_id.into_inner()),
            )
            .await
            .map_err(|e| map_db_error(e, "error soft delete links"))?;

        Ok(result.rows_affected())
    }
}
