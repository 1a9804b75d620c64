//! Command parse errors

use thiserror::Error;

/// Rejection of a malformed command; the message is the reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid command!")]
    InvalidCommand,

    #[error("invalid url!")]
    InvalidUrl,

    #[error("invalid link id!")]
    InvalidLinkId,
}
