//! Identity and ownership resolution shared by the usecases
//!
//! Nothing is cached: every call goes back to the store.

use linkrepo_core::entities::{Directory, Link, User};
use linkrepo_core::value_objects::LinkId;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Look up the caller by phone number
pub(crate) async fn resolve_user(ctx: &ServiceContext, phone_number: &str) -> ServiceResult<User> {
    ctx.user_repo()
        .get_by_phone_number(phone_number)
        .await?
        .ok_or(ServiceError::NotRegistered)
}

/// Look up one of the user's directories by title
pub(crate) async fn resolve_owned_directory(
    ctx: &ServiceContext,
    user: &User,
    title: &str,
) -> ServiceResult<Directory> {
    ctx.directory_repo()
        .get_by_title(user.id, title)
        .await?
        .filter(|directory| directory.is_owned_by(user.id))
        .ok_or(ServiceError::DirectoryNotFound)
}

/// Look up a link and check that its directory belongs to the user
///
/// A link in someone else's directory is reported as not found.
pub(crate) async fn resolve_owned_link(
    ctx: &ServiceContext,
    user: &User,
    link_id: LinkId,
) -> ServiceResult<Link> {
    let link = ctx
        .link_repo()
        .get_by_id(link_id)
        .await?
        .ok_or(ServiceError::LinkNotFound)?;

    let owned = ctx
        .directory_repo()
        .get_by_id(link.directory_id)
        .await?
        .is_some_and(|directory| directory.is_owned_by(user.id));

    if owned {
        Ok(link)
    } else {
        Err(ServiceError::LinkNotFound)
    }
}
