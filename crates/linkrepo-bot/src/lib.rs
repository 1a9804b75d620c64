//! # linkrepo-bot
//!
//! Chat front end of the link repository: parses `!repo` commands, runs them
//! against the usecases and delivers the replies through a messaging channel.

pub mod channel;
pub mod command;
pub mod dispatcher;
pub mod listener;
pub mod messages;
pub mod server;

pub use channel::{ChannelError, Contact, HttpChannel, InboundMessage, MessageChannel};
pub use command::{Command, ParseError};
pub use dispatcher::Dispatcher;
pub use listener::RepositoryListener;
pub use server::{create_app, create_bot_state, run, BotState};
