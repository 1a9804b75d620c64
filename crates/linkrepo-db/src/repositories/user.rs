//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use linkrepo_core::entities::User;
use linkrepo_core::error::DomainError;
use linkrepo_core::traits::{RepoResult, UserRepository};

use crate::models::UserModel;
use crate::pool::DbHandle;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    db: DbHandle,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { db: pool.into() }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn save(&self, phone_number: &str) -> RepoResult<User> {
        let model = self
            .db
            .fetch_one(
                sqlx::query_as::<_, UserModel>(
                    r"
                    INSERT INTO users (phone_number)
                    VALUES ($1)
                    RETURNING id, phone_number, created_at, deleted_at
                    ",
                )
                .bind(phone_number),
            )
            .await
            .map_err(|e| {
                map_unique_violation(e, "error creating users", || DomainError::PhoneNumberTaken)
            })?;

        Ok(User::from(model))
    }

    #[instrument(skip(self))]
    async fn get_by_phone_number(&self, phone_number: &str) -> RepoResult<Option<User>> {
        let result = self
            .db
            .fetch_optional(
                sqlx::query_as::<_, UserModel>(
                    r"
                    SELECT id, phone_number, created_at, deleted_at
                    FROM users
                    WHERE phone_number = $1 AND deleted_at IS NULL
                    ",
                )
                .bind(phone_number),
            )
            .await
            .map_err(|e| map_db_error(e, "error get users"))?;

        Ok(result.map(User::from))
    }
}
