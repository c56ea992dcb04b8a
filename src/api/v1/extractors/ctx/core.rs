/*
 * Responsibility
 * - Hand RequestCtx from request extensions to handlers
 * - A route mounted outside the pipeline is a wiring bug, not a client error
 */
use axum::{extract::FromRequestParts, http::request::Parts};

use super::types::RequestCtx;
use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct Ctx(pub RequestCtx);

impl<S> FromRequestParts<S> for Ctx
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<RequestCtx>()
            .cloned()
            .map(Ctx)
            .ok_or_else(|| {
                tracing::error!(path = %parts.uri.path(), "request context missing");
                AppError::Internal
            })
    }
}
