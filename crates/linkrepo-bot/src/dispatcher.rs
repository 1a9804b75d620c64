//! Command dispatcher
//!
//! Turns a message body into exactly one reply. Failures never escape: parse
//! errors and usecase errors are rendered as text.

use std::sync::Arc;

use linkrepo_service::{
    DirectoryService, ErrorKind, LinkService, ServiceContext, ServiceError, ServiceResult,
    UserService,
};
use tracing::{debug, error, instrument};

use crate::command::Command;
use crate::messages;

/// Routes parsed commands to the usecases
#[derive(Clone)]
pub struct Dispatcher {
    ctx: Arc<ServiceContext>,
    trigger: String,
}

impl Dispatcher {
    /// Create a dispatcher answering to `trigger`
    pub fn new(ctx: Arc<ServiceContext>, trigger: impl Into<String>) -> Self {
        Self {
            ctx,
            trigger: trigger.into(),
        }
    }

    /// Get the trigger word
    pub fn trigger(&self) -> &str {
        &self.trigger
    }

    /// Check whether the body is addressed to the bot
    pub fn is_command(&self, body: &str) -> bool {
        body.split_whitespace().next() == Some(self.trigger.as_str())
    }

    /// Handle one message body from the given phone number
    #[instrument(skip(self, body))]
    pub async fn dispatch(&self, phone_number: &str, body: &str) -> String {
        let command = match Command::parse(body) {
            Ok(command) => command,
            Err(e) => {
                debug!(error = %e, "Rejected command");
                return e.to_string();
            }
        };

        match self.execute(phone_number, command).await {
            Ok(reply) => reply,
            Err(e) => reply_for_error(&e),
        }
    }

    async fn execute(&self, phone_number: &str, command: Command) -> ServiceResult<String> {
        let ctx = self.ctx.as_ref();

        let reply = match command {
            Command::Help => messages::COMMANDS.to_string(),
            Command::Register => {
                UserService::new(ctx).register(phone_number).await?;
                messages::REGISTERED.to_string()
            }
            Command::ListDirectories => {
                let directories = DirectoryService::new(ctx).list(phone_number).await?;
                messages::render_directories(&directories)
            }
            Command::AddDirectory { title } => {
                DirectoryService::new(ctx).add(phone_number, &title).await?;
                messages::DIRECTORY_CREATED.to_string()
            }
            Command::DeleteDirectory { title } => {
                DirectoryService::new(ctx).delete(phone_number, &title).await?;
                messages::DIRECTORY_DELETED.to_string()
            }
            Command::RenameDirectory { title, new_title } => {
                DirectoryService::new(ctx)
                    .update(phone_number, &title, &new_title)
                    .await?;
                messages::DIRECTORY_UPDATED.to_string()
            }
            Command::ShowDirectory { title } => {
                let links = LinkService::new(ctx).list(phone_number, &title).await?;
                messages::render_links(&links)
            }
            Command::AddLink { directory, link } => {
                LinkService::new(ctx).save(phone_number, &directory, link).await?;
                messages::LINK_SAVED.to_string()
            }
            Command::DeleteLink { id } => {
                LinkService::new(ctx).delete(phone_number, id).await?;
                messages::LINK_DELETED.to_string()
            }
            Command::UpdateLink { id, change } => {
                LinkService::new(ctx).update(phone_number, id, change).await?;
                messages::LINK_UPDATED.to_string()
            }
        };

        Ok(reply)
    }
}

/// Reply text for a failed usecase
pub fn reply_for_error(err: &ServiceError) -> String {
    match err.kind() {
        ErrorKind::Internal => {
            error!(error = %err, code = err.error_code(), "Command failed");
            messages::INTERNAL_ERROR.to_string()
        }
        ErrorKind::Unauthorized | ErrorKind::BadRequest => {
            debug!(code = err.error_code(), "Command refused");
            err.to_string()
        }
    }
}
