/*
 * Responsibility
 * - v1 handlers, one module per resource
 * - Shared caller lookup: RequestCtx.username -> users row
 */
pub mod auth;
pub mod blogs;
pub mod health;
pub mod orders;
pub mod products;
pub mod users;

use crate::{
    api::v1::extractors::RequestCtx,
    error::AppError,
    repos::{StoreConn, user_repo::UserRow},
};

/// The user the request acts as.
///
/// A token that verified at the gate can still name a user that no longer
/// exists; that caller is treated as unauthenticated.
pub(super) async fn caller(
    conn: &mut dyn StoreConn,
    ctx: &RequestCtx,
) -> Result<UserRow, AppError> {
    if ctx.username.is_empty() {
        return Err(AppError::Unauthorized);
    }
    conn.get_user_by_name(&ctx.username).await?.ok_or_else(|| {
        tracing::warn!(username = %ctx.username, "token names an unknown user");
        AppError::Unauthorized
    })
}
