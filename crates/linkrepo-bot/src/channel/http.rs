//! HTTP messaging channel
//!
//! Posts replies as JSON to an outbound gateway. Without an outbound url the
//! channel only resolves contacts and replies travel back in the webhook
//! response.

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, instrument};

use super::{phone_number_from_chat_id, ChannelError, Contact, InboundMessage, MessageChannel};

/// Outbound message body
#[derive(Debug, Serialize)]
struct OutboundMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Messaging channel backed by an HTTP gateway
#[derive(Debug, Clone)]
pub struct HttpChannel {
    client: reqwest::Client,
    outbound_url: Option<String>,
}

impl HttpChannel {
    /// Create a channel posting replies to `outbound_url`
    pub fn new(outbound_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            outbound_url,
        }
    }

    /// Get the outbound url
    pub fn outbound_url(&self) -> Option<&str> {
        self.outbound_url.as_deref()
    }
}

#[async_trait]
impl MessageChannel for HttpChannel {
    async fn resolve_contact(&self, message: &InboundMessage) -> Result<Contact, ChannelError> {
        let sender = message.sender();

        phone_number_from_chat_id(sender)
            .map(|number| Contact {
                number: number.to_string(),
            })
            .ok_or_else(|| ChannelError::UnknownContact(sender.to_string()))
    }

    #[instrument(skip(self, text))]
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), ChannelError> {
        let Some(url) = self.outbound_url.as_deref() else {
            debug!("No outbound url configured, reply returned inline");
            return Ok(());
        };

        self.client
            .post(url)
            .json(&OutboundMessage { chat_id, text })
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| ChannelError::Delivery(e.to_string()))?;

        debug!("Reply delivered");
        Ok(())
    }
}
