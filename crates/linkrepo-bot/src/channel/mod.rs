//! Messaging channel
//!
//! The bot only needs two things from a chat network: who sent a message and
//! a way to answer. [`MessageChannel`] captures both.

mod http;

pub use http::HttpChannel;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Chat id suffixes appended by WhatsApp-style networks
const CHAT_ID_SUFFIXES: [&str; 2] = ["@c.us", "@s.whatsapp.net"];

/// A message received from the chat network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundMessage {
    /// Chat the message was posted in; replies go here
    pub from: String,
    /// Sender inside a group chat
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub body: String,
}

impl InboundMessage {
    pub fn new(from: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            author: None,
            body: body.into(),
        }
    }

    /// Set the group chat author
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Chat id of the person who wrote the message
    pub fn sender(&self) -> &str {
        self.author.as_deref().unwrap_or(&self.from)
    }
}

/// Sender of a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub number: String,
}

/// Messaging channel errors
#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("Cannot resolve contact for {0}")]
    UnknownContact(String),

    #[error("Failed to deliver message: {0}")]
    Delivery(String),
}

/// Chat network the bot talks to
#[async_trait]
pub trait MessageChannel: Send + Sync {
    /// Resolve the phone number of the message sender
    async fn resolve_contact(&self, message: &InboundMessage) -> Result<Contact, ChannelError>;

    /// Send a text message to a chat
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), ChannelError>;
}

/// Strip the network suffix from a chat id, leaving the phone number
pub fn phone_number_from_chat_id(chat_id: &str) -> Option<&str> {
    let number = CHAT_ID_SUFFIXES
        .iter()
        .find_map(|suffix| chat_id.strip_suffix(suffix))
        .unwrap_or(chat_id)
        .trim();

    (!number.is_empty()).then_some(number)
}
