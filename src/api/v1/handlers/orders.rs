/*
 * Responsibility
 * - /order CRUD (every route requires a token)
 * - Create/update record the caller as the order's user
 */
use axum::{Json, extract::State, http::StatusCode};

use crate::{
    api::v1::{
        dto::orders::{OrderRequest, OrderResponse},
        extractors::{Ctx, JsonBody},
    },
    error::AppError,
    state::AppState,
};

use super::caller;

const RESOURCE: &str = "order";

pub async fn list_orders(
    State(state): State<AppState>,
) -> Result<Json<Vec<OrderResponse>>, AppError> {
    let mut conn = state.store.acquire().await?;
    let rows = conn.list_orders().await?;

    Ok(Json(rows.into_iter().map(OrderResponse::from).collect()))
}

pub async fn get_order(
    State(state): State<AppState>,
    Ctx(ctx): Ctx,
) -> Result<Json<OrderResponse>, AppError> {
    let id = ctx.record_id(RESOURCE)?;

    let mut conn = state.store.acquire().await?;
    let row = conn
        .get_order(id)
        .await?
        .ok_or(AppError::not_found(RESOURCE))?;

    Ok(Json(row.into()))
}

pub async fn create_order(
    State(state): State<AppState>,
    Ctx(ctx): Ctx,
    JsonBody(req): JsonBody<OrderRequest>,
) -> Result<(StatusCode, Json<OrderResponse>), AppError> {
    req.validate().map_err(AppError::bad_request)?;

    let mut conn = state.store.acquire().await?;
    let user = caller(conn.as_mut(), &ctx).await?;
    let row = conn.create_order(&req.into_fields(user.id)).await?;

    Ok((StatusCode::CREATED, Json(row.into())))
}

pub async fn update_order(
    State(state): State<AppState>,
    Ctx(ctx): Ctx,
    JsonBody(req): JsonBody<OrderRequest>,
) -> Result<Json<OrderResponse>, AppError> {
    req.validate().map_err(AppError::bad_request)?;
    let id = ctx.record_id(RESOURCE)?;

    let mut conn = state.store.acquire().await?;
    let user = caller(conn.as_mut(), &ctx).await?;
    let row = conn
        .update_order(id, &req.into_fields(user.id))
        .await?
        .ok_or(AppError::not_found(RESOURCE))?;

    Ok(Json(row.into()))
}

pub async fn delete_order(
    State(state): State<AppState>,
    Ctx(ctx): Ctx,
) -> Result<StatusCode, AppError> {
    let id = ctx.record_id(RESOURCE)?;

    let mut conn = state.store.acquire().await?;
    if conn.delete_order(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(RESOURCE))
    }
}
