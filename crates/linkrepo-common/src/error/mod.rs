//! Error types shared by binaries

mod app_error;

pub use app_error::{AppError, ErrorResponse};
