//! Ordered request stages run in front of a group of routes.
//!
//! A stage either hands the request on (possibly enriched) or stops the chain
//! with an `AppError`, which becomes the response. Stages after a failing one
//! never run, and neither does the handler.

use std::sync::Arc;

use axum::{
    Router,
    extract::{RawPathParams, Request, State, rejection::RawPathParamsRejection},
    middleware::{self, Next},
    response::Response,
};

use super::{
    context::{ContextBuilder, PathParams},
    gate::AuthGate,
};
use crate::{error::AppError, services::auth::TokenCodec};

pub trait Stage: Send + Sync {
    fn name(&self) -> &'static str;
    fn apply(&self, req: Request) -> Result<Request, AppError>;
}

#[derive(Clone, Default)]
pub struct Pipeline {
    stages: Vec<Arc<dyn Stage>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `stage`; stages run in the order they were added.
    pub fn then(mut self, stage: impl Stage + 'static) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    /// Context only. Anonymous requests get an empty username.
    pub fn public(tokens: Arc<TokenCodec>) -> Self {
        Self::new().then(ContextBuilder::new(tokens))
    }

    /// Auth gate first, then context.
    pub fn protected(tokens: Arc<TokenCodec>) -> Self {
        Self::new()
            .then(AuthGate::new(tokens.clone()))
            .then(ContextBuilder::new(tokens))
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    pub fn run(&self, req: Request) -> Result<Request, AppError> {
        self.stages.iter().try_fold(req, |req, stage| {
            stage.apply(req).inspect_err(|e| {
                tracing::debug!(stage = stage.name(), status = %e.status(), "request stopped");
            })
        })
    }

    /// Mounts the pipeline on every route already registered in `router`.
    pub fn wrap<S>(self, router: Router<S>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        router.route_layer(middleware::from_fn_with_state(self, guard))
    }
}

async fn guard(
    State(pipeline): State<Pipeline>,
    params: Result<RawPathParams, RawPathParamsRejection>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Captures that fail to decode leave the id empty; handlers reject it.
    if let Ok(params) = params {
        req.extensions_mut().insert(PathParams::from(&params));
    }
    let req = pipeline.run(req)?;
    Ok(next.run(req).await)
}
