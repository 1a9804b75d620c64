//! Reply texts and listing renderers

use std::fmt::Write;

use linkrepo_core::entities::{Directory, Link};

pub const REGISTERED: &str = "successfully registered!";
pub const DIRECTORY_CREATED: &str = "directory created";
pub const DIRECTORY_DELETED: &str = "directory deleted";
pub const DIRECTORY_UPDATED: &str = "directory updated";
pub const LINK_SAVED: &str = "link saved";
pub const LINK_DELETED: &str = "link deleted";
pub const LINK_UPDATED: &str = "link updated!";

pub const NO_DIRECTORIES: &str = "you have no directories.";
pub const NO_LINKS: &str = "no links in this directory.";

/// Reply for any storage or infrastructure failure
pub const INTERNAL_ERROR: &str = "something went wrong. try again later.";

/// Help text listing every command
pub const COMMANDS: &str = r#"1. !repo commands -> show this list
2. !repo register -> register your phone number
3. !repo dir add [title] -> create a directory
4. !repo dir show -> list your directories
5. !repo dir delete [title] -> delete a directory and its links
6. !repo dir update [title] [new title] -> rename a directory
7. !repo dir show [title] -> list the links of a directory
8. !repo link add [directory] [url] "[title]" -> save a link into a directory
9. !repo link delete #[id] -> delete a link
10. !repo link update #[id] [- | new url] [- | "new title"] -> change a link, "-" keeps the field"#;

/// Numbered listing of directory titles
pub fn render_directories(directories: &[Directory]) -> String {
    if directories.is_empty() {
        return NO_DIRECTORIES.to_string();
    }

    let mut out = String::from("Directories:");
    for (i, directory) in directories.iter().enumerate() {
        let _ = write!(out, "\n{}. {}", i + 1, directory.title);
    }
    out
}

/// Numbered listing of links with the id used by `link delete`/`link update`
pub fn render_links(links: &[Link]) -> String {
    if links.is_empty() {
        return NO_LINKS.to_string();
    }

    let mut out = String::from("Links:");
    for (i, link) in links.iter().enumerate() {
        let _ = write!(out, "\n{}. #{} {} ({})", i + 1, link.id, link.url, link.title);
    }
    out
}
