//! Bot command grammar
//!
//! ```text
//! !repo register
//! !repo commands
//! !repo dir
//! !repo dir show [title]
//! !repo dir add <title>
//! !repo dir delete <title>
//! !repo dir update <title> <new_title>
//! !repo link add <dir_title> <url> "<title>"
//! !repo link delete #<id>
//! !repo link update #<id> <url|-> "<title>"|-
//! ```
//!
//! Arity, quoting, link ids and urls are all checked here, before any usecase
//! runs. Words are separated by any whitespace; a quoted link title is taken
//! verbatim from the message.

mod error;

pub use error::ParseError;

use linkrepo_core::entities::{LinkChange, NewLink};
use linkrepo_core::value_objects::LinkId;
use linkrepo_service::is_url;

/// Marks an unchanged field in `link update`
pub const UNCHANGED: &str = "-";

/// A parsed bot command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Register,
    Help,
    ListDirectories,
    AddDirectory {
        title: String,
    },
    DeleteDirectory {
        title: String,
    },
    RenameDirectory {
        title: String,
        new_title: String,
    },
    ShowDirectory {
        title: String,
    },
    AddLink {
        directory: String,
        link: NewLink,
    },
    DeleteLink {
        id: LinkId,
    },
    UpdateLink {
        id: LinkId,
        change: LinkChange,
    },
}

impl Command {
    /// Parse a message body whose first word is the trigger
    pub fn parse(body: &str) -> Result<Self, ParseError> {
        let words = words(body);
        let tokens: Vec<&str> = words.iter().map(|word| word.text).collect();

        match tokens.get(1).copied() {
            Some("register") if tokens.len() == 2 => Ok(Self::Register),
            Some("commands") if tokens.len() == 2 => Ok(Self::Help),
            Some("dir") => parse_dir(&tokens),
            Some("link") => parse_link(&words),
            _ => Err(ParseError::InvalidCommand),
        }
    }
}

/// A whitespace separated word and the raw message text from it onwards
#[derive(Debug, Clone, Copy)]
struct Word<'a> {
    text: &'a str,
    tail: &'a str,
}

fn words(body: &str) -> Vec<Word<'_>> {
    let mut words = Vec::new();
    let mut start = None;

    for (i, c) in body.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                words.push(Word {
                    text: &body[s..i],
                    tail: body[s..].trim_end(),
                });
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = start {
        words.push(Word {
            text: &body[s..],
            tail: &body[s..],
        });
    }

    words
}

fn parse_dir(tokens: &[&str]) -> Result<Command, ParseError> {
    let title = || tokens[3].to_string();

    match (tokens.get(2).copied(), tokens.len()) {
        (None, _) | (Some("show"), 3) => Ok(Command::ListDirectories),
        (Some("show"), 4) => Ok(Command::ShowDirectory { title: title() }),
        (Some("add"), 4) => Ok(Command::AddDirectory { title: title() }),
        (Some("delete"), 4) => Ok(Command::DeleteDirectory { title: title() }),
        (Some("update"), 5) => Ok(Command::RenameDirectory {
            title: title(),
            new_title: tokens[4].to_string(),
        }),
        _ => Err(ParseError::InvalidCommand),
    }
}

fn parse_link(words: &[Word<'_>]) -> Result<Command, ParseError> {
    match (words.get(2).map(|word| word.text), words.len()) {
        (Some("add"), n) if n >= 6 => {
            let url = words[4].text;
            if !is_url(url) {
                return Err(ParseError::InvalidUrl);
            }
            let title = quoted_title(words[5].tail)?;

            Ok(Command::AddLink {
                directory: words[3].text.to_string(),
                link: NewLink::new(url, title),
            })
        }
        (Some("delete"), 4) => Ok(Command::DeleteLink {
            id: link_ref(words[3].text)?,
        }),
        (Some("update"), n) if n >= 6 => {
            let id = link_ref(words[3].text)?;

            let url = match words[4].text {
                UNCHANGED => None,
                url if is_url(url) => Some(url.to_string()),
                _ => return Err(ParseError::InvalidUrl),
            };

            let title = match words[5].tail {
                UNCHANGED => None,
                rest => Some(quoted_title(rest)?),
            };

            Ok(Command::UpdateLink {
                id,
                change: LinkChange { url, title },
            })
        }
        _ => Err(ParseError::InvalidCommand),
    }
}

/// `#<id>` reference to a link, digits only
fn link_ref(token: &str) -> Result<LinkId, ParseError> {
    token
        .strip_prefix('#')
        .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
        .ok_or(ParseError::InvalidLinkId)?
        .parse()
        .map_err(|_| ParseError::InvalidLinkId)
}

/// Strip the surrounding double quotes, keeping inner spacing as typed
fn quoted_title(raw: &str) -> Result<String, ParseError> {
    raw.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .filter(|title| !title.is_empty())
        .map(str::to_string)
        .ok_or(ParseError::InvalidCommand)
}
