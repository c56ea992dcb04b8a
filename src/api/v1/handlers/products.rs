/*
 * Responsibility
 * - /products CRUD
 * - GET is public; writes require a token, delete additionally an admin
 */
use axum::{Json, extract::State, http::StatusCode};

use crate::{
    api::v1::{
        dto::products::{ProductRequest, ProductResponse},
        extractors::{Ctx, JsonBody},
    },
    error::AppError,
    repos::product_repo::ProductFields,
    state::AppState,
};

use super::caller;

const RESOURCE: &str = "product";

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let mut conn = state.store.acquire().await?;
    let rows = conn.list_products().await?;

    Ok(Json(rows.into_iter().map(ProductResponse::from).collect()))
}

pub async fn get_product(
    State(state): State<AppState>,
    Ctx(ctx): Ctx,
) -> Result<Json<ProductResponse>, AppError> {
    let id = ctx.record_id(RESOURCE)?;

    let mut conn = state.store.acquire().await?;
    let row = conn
        .get_product(id)
        .await?
        .ok_or(AppError::not_found(RESOURCE))?;

    Ok(Json(row.into()))
}

pub async fn create_product(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<ProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), AppError> {
    req.validate().map_err(AppError::bad_request)?;

    let mut conn = state.store.acquire().await?;
    let row = conn.create_product(&ProductFields::from(req)).await?;

    Ok((StatusCode::CREATED, Json(row.into())))
}

pub async fn update_product(
    State(state): State<AppState>,
    Ctx(ctx): Ctx,
    JsonBody(req): JsonBody<ProductRequest>,
) -> Result<Json<ProductResponse>, AppError> {
    req.validate().map_err(AppError::bad_request)?;
    let id = ctx.record_id(RESOURCE)?;

    let mut conn = state.store.acquire().await?;
    let row = conn
        .update_product(id, &ProductFields::from(req))
        .await?
        .ok_or(AppError::not_found(RESOURCE))?;

    Ok(Json(row.into()))
}

/// Only an admin's delete reaches a row; anyone else gets 404.
pub async fn delete_product(
    State(state): State<AppState>,
    Ctx(ctx): Ctx,
) -> Result<StatusCode, AppError> {
    let id = ctx.record_id(RESOURCE)?;

    let mut conn = state.store.acquire().await?;
    let requester = caller(conn.as_mut(), &ctx).await?;
    if conn.delete_product(id, requester.id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(RESOURCE))
    }
}
