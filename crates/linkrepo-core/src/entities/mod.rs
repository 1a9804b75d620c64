//! Domain entities - core business objects

mod directory;
mod link;
mod user;

pub use directory::Directory;
pub use link::{Link, LinkChange, NewLink};
pub use user::User;
