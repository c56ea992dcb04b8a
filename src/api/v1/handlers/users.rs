/*
 * Responsibility
 * - /user CRUD (every route requires a token)
 * - Update/delete: the caller must be that user or an admin, otherwise 404
 * - Only an admin can change is_admin
 */
use axum::{Json, extract::State, http::StatusCode};

use crate::{
    api::v1::{
        dto::users::{UserRequest, UserResponse},
        extractors::{Ctx, JsonBody},
    },
    error::AppError,
    repos::user_repo::UserFields,
    state::AppState,
};

use super::caller;

const RESOURCE: &str = "user";

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let mut conn = state.store.acquire().await?;
    let rows = conn.list_users().await?;

    Ok(Json(rows.into_iter().map(UserResponse::from).collect()))
}

pub async fn get_user(
    State(state): State<AppState>,
    Ctx(ctx): Ctx,
) -> Result<Json<UserResponse>, AppError> {
    let id = ctx.record_id(RESOURCE)?;

    let mut conn = state.store.acquire().await?;
    let row = conn
        .get_user(id)
        .await?
        .ok_or(AppError::not_found(RESOURCE))?;

    Ok(Json(row.into()))
}

pub async fn update_user(
    State(state): State<AppState>,
    Ctx(ctx): Ctx,
    JsonBody(req): JsonBody<UserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    req.validate().map_err(AppError::bad_request)?;
    let id = ctx.record_id(RESOURCE)?;

    let mut conn = state.store.acquire().await?;
    let requester = caller(conn.as_mut(), &ctx).await?;
    if requester.id != id && !requester.is_admin {
        tracing::info!(requester = requester.id, target = id, "user update refused");
        return Err(AppError::not_found(RESOURCE));
    }
    let current = conn
        .get_user(id)
        .await?
        .ok_or(AppError::not_found(RESOURCE))?;

    let password_hash = state.passwords.hash_blocking(req.password).await?;
    let is_admin = if requester.is_admin {
        req.is_admin
    } else {
        current.is_admin
    };

    let row = conn
        .update_user(
            id,
            &UserFields {
                name: req.name,
                password_hash,
                email: req.email,
                is_admin,
            },
        )
        .await?
        .ok_or(AppError::not_found(RESOURCE))?;

    Ok(Json(row.into()))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Ctx(ctx): Ctx,
) -> Result<StatusCode, AppError> {
    let id = ctx.record_id(RESOURCE)?;

    let mut conn = state.store.acquire().await?;
    let requester = caller(conn.as_mut(), &ctx).await?;
    if conn.delete_user(id, requester.id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(RESOURCE))
    }
}
