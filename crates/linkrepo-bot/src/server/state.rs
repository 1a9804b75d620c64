//! Bot state
//!
//! Application state for the webhook server.

use std::sync::Arc;

use linkrepo_db::PgPool;

use crate::channel::MessageChannel;
use crate::listener::RepositoryListener;

/// Bot application state
///
/// Holds all shared dependencies for the webhook handlers.
#[derive(Clone)]
pub struct BotState {
    /// Listener running inbound messages through the dispatcher
    listener: Arc<RepositoryListener>,
    /// Channel used to answer
    channel: Arc<dyn MessageChannel>,
    /// Pool probed by the readiness check
    pool: Option<PgPool>,
}

impl BotState {
    /// Create a new bot state
    pub fn new(listener: RepositoryListener, channel: Arc<dyn MessageChannel>) -> Self {
        Self {
            listener: Arc::new(listener),
            channel,
            pool: None,
        }
    }

    /// Attach the database pool used by the readiness check
    pub fn with_pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    /// Get the listener
    pub fn listener(&self) -> &RepositoryListener {
        &self.listener
    }

    /// Get the messaging channel
    pub fn channel(&self) -> &dyn MessageChannel {
        self.channel.as_ref()
    }

    /// Get the database pool, if any
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }
}

impl std::fmt::Debug for BotState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotState")
            .field("channel", &"MessageChannel")
            .field("pool", &self.pool.is_some())
            .finish()
    }
}
