/*
 * Responsibility
 * - JSON request bodies that map every decode failure to 400 "Invalid request body"
 * - Content-Type is not checked; clients here often omit it
 */
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::debug!(error = %e, "body read failed");
            AppError::bad_request("Invalid request body")
        })?;
        serde_json::from_slice(&bytes).map(JsonBody).map_err(|e| {
            tracing::debug!(error = %e, "body decode failed");
            AppError::bad_request("Invalid request body")
        })
    }
}
