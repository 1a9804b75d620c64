//! Business logic services
//!
//! Each service borrows the [`ServiceContext`] and re-derives the caller's
//! identity and ownership from the store on every call.

mod access;
pub mod context;
pub mod directory;
pub mod error;
pub mod link;
pub mod user;

pub use context::ServiceContext;
pub use directory::DirectoryService;
pub use error::{ErrorKind, ServiceError, ServiceResult};
pub use link::LinkService;
pub use user::UserService;
