//! # linkrepo-service
//!
//! Application layer containing the usecases, the url validator and the
//! dependency container they run against.

pub mod services;
pub mod validator;

pub use services::{
    DirectoryService, ErrorKind, LinkService, ServiceContext, ServiceError,
    ServiceResult, UserService,
};
pub use validator::is_url;
