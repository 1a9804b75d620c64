//! Repository listener
//!
//! Entry point for every inbound chat message.

use tracing::{error, instrument, warn};

use crate::channel::{InboundMessage, MessageChannel};
use crate::dispatcher::Dispatcher;
use crate::messages;

/// Feeds bot commands to the dispatcher and answers through the channel
#[derive(Clone)]
pub struct RepositoryListener {
    dispatcher: Dispatcher,
}

impl RepositoryListener {
    /// Create a new listener
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Handle one inbound message
    ///
    /// Returns `None` when the message is not addressed to the bot. Otherwise
    /// exactly one reply is sent to `message.from` and returned.
    #[instrument(skip(self, channel, message), fields(from = %message.from))]
    pub async fn listen(
        &self,
        channel: &dyn MessageChannel,
        message: &InboundMessage,
    ) -> Option<String> {
        if !self.dispatcher.is_command(&message.body) {
            return None;
        }

        let reply = match channel.resolve_contact(message).await {
            Ok(contact) => self.dispatcher.dispatch(&contact.number, &message.body).await,
            Err(e) => {
                warn!(error = %e, "Failed to resolve contact");
                messages::INTERNAL_ERROR.to_string()
            }
        };

        if let Err(e) = channel.send_message(&message.from, &reply).await {
            error!(error = %e, "Failed to send reply");
        }

        Some(reply)
    }
}
