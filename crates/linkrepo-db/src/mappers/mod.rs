//! Model to entity mappers
//!
//! `From<Model> for Entity` conversions turning database rows into domain
//! objects. The soft-delete marker stays behind: queries only ever return
//! live rows.

mod directory;
mod link;
mod user;
