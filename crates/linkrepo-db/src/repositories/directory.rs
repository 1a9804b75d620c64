//! PostgreSQL implementation of DirectoryRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use linkrepo_core::entities::Directory;
use linkrepo_core::error::DomainError;
use linkrepo_core::traits::{DirectoryRepository, RepoResult};
use linkrepo_core::value_objects::{DirectoryId, UserId};

use crate::models::DirectoryModel;
use crate::pool::DbHandle;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of DirectoryRepository
#[derive(Clone)]
pub struct PgDirectoryRepository {
    db: DbHandle,
}

impl PgDirectoryRepository {
    /// Create a new PgDirectoryRepository
    pub fn new(pool: PgPool) -> Self {
        Self { db: pool.into() }
    }

    /// Create a repository bound to an existing handle (pool or transaction)
    pub fn with_handle(db: DbHandle) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DirectoryRepository for PgDirectoryRepository {
    #[instrument(skip(self))]
    async fn save(&self, user_id: UserId, title: &str) -> RepoResult<Directory> {
        let model = self
            .db
            .fetch_one(
                sqlx::query_as::<_, DirectoryModel>(
                    r"
                    INSERT INTO directories (id_user, title)
                    VALUES ($1, $2)
                    RETURNING id, id_user, title, created_at, updated_at, deleted_at
                    ",
                )
                .bind(user_id.into_inner())
                .bind(title),
            )
            .await
            .map_err(|e| {
                map_unique_violation(e, "error creating directory", || {
                    DomainError::DirectoryTitleTaken
                })
            })?;

        Ok(Directory::from(model))
    }

    #[instrument(skip(self))]
    async fn get_by_title(&self, user_id: UserId, title: &str) -> RepoResult<Option<Directory>> {
        let result = self
            .db
            .fetch_optional(
                sqlx::query_as::<_, DirectoryModel>(
                    r"
                    SELECT id, id_user, title, created_at, updated_at, deleted_at
                    FROM directories
                    WHERE id_user = $1 AND title = $2 AND deleted_at IS NULL
                    ",
                )
                .bind(user_id.into_inner())
                .bind(title),
            )
            .await
            .map_err(|e| map_db_error(e, "error getting directory"))?;

        Ok(result.map(Directory::from))
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: DirectoryId) -> RepoResult<Option<Directory>> {
        let result = self
            .db
            .fetch_optional(
                sqlx::query_as::<_, DirectoryModel>(
                    r"
                    SELECT id, id_user, title, created_at, updated_at, deleted_at
                    FROM directories
                    WHERE id = $1 AND deleted_at IS NULL
                    ",
                )
                .bind(id.into_inner()),
            )
            .await
            .map_err(|e| map_db_error(e, "error get directory"))?;

        Ok(result.map(Directory::from))
    }

    #[instrument(skip(self))]
    async fn get_all(&self, user_id: UserId) -> RepoResult<Vec<Directory>> {
        let results = self
            .db
            .fetch_all(
                sqlx::query_as::<_, DirectoryModel>(
                    r"
                    SELECT id, id_user, title, created_at, updated_at, deleted_at
                    FROM directories
                    WHERE id_user = $1 AND deleted_at IS NULL
                    ORDER BY id
                    ",
                )
                .bind(user_id.into_inner()),
            )
            .await
            .map_err(|e| map_db_error(e, "error get directories"))?;

        Ok(results.into_iter().map(Directory::from).collect())
    }

    #[instrument(skip(self))]
    async fn soft_delete_by_title(&self, user_id: UserId, title: &str) -> RepoResult<()> {
        self.db
            .execute(
                sqlx::query(
                    r"
                    UPDATE directories
                    SET deleted_at = NOW()
                    WHERE id_user = $1 AND title = $2 AND deleted_at IS NULL
                    ",
                )
                .bind(user_id.into_inner())
                .bind(title),
            )
            .await
            .map_err(|e| map_db_error(e, "error soft delete directory"))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, directory: &Directory, new_title: &str) -> RepoResult<()> {
        self.db
            .execute(
                sqlx::query(
                    r"
                    UPDATE directories
                    SET title = $1, updated_at = NOW()
                    WHERE id = $2 AND id_user = $3 AND deleted_at IS NULL
                    ",
                )
                .bind(new_title)
                .bind(directory.id.into_inner())
                .bind(directory.user_id.into_inner()),
            )
            .await
            .map_err(|e| {
                map_unique_violation(e, "error updating directory", || {
                    DomainError::DirectoryTitleTaken
                })
            })?;

        Ok(())
    }
}
