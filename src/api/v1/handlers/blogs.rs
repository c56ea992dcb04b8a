/*
 * Responsibility
 * - /blogs CRUD
 * - GET is public; writes require a token and stamp the caller as author
 */
use axum::{Json, extract::State, http::StatusCode};

use crate::{
    api::v1::{
        dto::blogs::{BlogRequest, BlogResponse},
        extractors::{Ctx, JsonBody},
    },
    error::AppError,
    state::AppState,
};

use super::caller;

const RESOURCE: &str = "blog";

pub async fn list_blogs(
    State(state): State<AppState>,
) -> Result<Json<Vec<BlogResponse>>, AppError> {
    let mut conn = state.store.acquire().await?;
    let rows = conn.list_blogs().await?;

    Ok(Json(rows.into_iter().map(BlogResponse::from).collect()))
}

pub async fn get_blog(
    State(state): State<AppState>,
    Ctx(ctx): Ctx,
) -> Result<Json<BlogResponse>, AppError> {
    let id = ctx.record_id(RESOURCE)?;

    let mut conn = state.store.acquire().await?;
    let row = conn
        .get_blog(id)
        .await?
        .ok_or(AppError::not_found(RESOURCE))?;

    Ok(Json(row.into()))
}

pub async fn create_blog(
    State(state): State<AppState>,
    Ctx(ctx): Ctx,
    JsonBody(req): JsonBody<BlogRequest>,
) -> Result<(StatusCode, Json<BlogResponse>), AppError> {
    req.validate().map_err(AppError::bad_request)?;

    let mut conn = state.store.acquire().await?;
    let author = caller(conn.as_mut(), &ctx).await?;
    let row = conn.create_blog(&req.into_fields(author.id)).await?;

    Ok((StatusCode::CREATED, Json(row.into())))
}

pub async fn update_blog(
    State(state): State<AppState>,
    Ctx(ctx): Ctx,
    JsonBody(req): JsonBody<BlogRequest>,
) -> Result<Json<BlogResponse>, AppError> {
    req.validate().map_err(AppError::bad_request)?;
    let id = ctx.record_id(RESOURCE)?;

    let mut conn = state.store.acquire().await?;
    let author = caller(conn.as_mut(), &ctx).await?;
    let row = conn
        .update_blog(id, &req.into_fields(author.id))
        .await?
        .ok_or(AppError::not_found(RESOURCE))?;

    Ok(Json(row.into()))
}

pub async fn delete_blog(
    State(state): State<AppState>,
    Ctx(ctx): Ctx,
) -> Result<StatusCode, AppError> {
    let id = ctx.record_id(RESOURCE)?;

    let mut conn = state.store.acquire().await?;
    if conn.delete_blog(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(RESOURCE))
    }
}
