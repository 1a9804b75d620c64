//! User service
//!
//! Handles registration of chat users by phone number.

use linkrepo_core::entities::User;
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a phone number
    ///
    /// A concurrent registration that slips past the lookup still fails on
    /// the unique index and maps to the same error.
    #[instrument(skip(self))]
    pub async fn register(&self, phone_number: &str) -> ServiceResult<User> {
        if self
            .ctx
            .user_repo()
            .get_by_phone_number(phone_number)
            .await?
            .is_some()
        {
            return Err(ServiceError::AlreadyRegistered);
        }

        let user = self.ctx.user_repo().save(phone_number).await?;

        info!(user_id = %user.id, "User registered");

        Ok(user)
    }
}
