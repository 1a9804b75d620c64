//! Database models - SQLx-compatible structs for PostgreSQL tables

mod directory;
mod link;
mod user;

pub use directory::DirectoryModel;
pub use link::LinkModel;
pub use user::UserModel;
