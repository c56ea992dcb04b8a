//! Context builder: derives `RequestCtx` and stores it in request extensions.
//!
//! Never fails. Missing inputs become empty strings, so public routes see
//! anonymous callers as `username == ""`.

use std::sync::Arc;

use axum::extract::{RawPathParams, Request};

use super::{
    cookie::{self, TOKEN_COOKIE},
    pipeline::Stage,
};
use crate::{api::v1::extractors::RequestCtx, error::AppError, services::auth::TokenCodec};

const ID_PARAM: &str = "id";

/// Percent-decoded captures of the matched route, owned so they can ride in
/// request extensions ahead of the stages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams(Vec<(String, String)>);

impl PathParams {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

impl From<&RawPathParams> for PathParams {
    fn from(raw: &RawPathParams) -> Self {
        Self(
            raw.iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        )
    }
}

pub struct ContextBuilder {
    tokens: Arc<TokenCodec>,
}

impl ContextBuilder {
    pub fn new(tokens: Arc<TokenCodec>) -> Self {
        Self { tokens }
    }

    fn username(&self, req: &Request) -> String {
        cookie::read(req.headers(), TOKEN_COOKIE)
            .ok()
            .flatten()
            .and_then(|token| self.tokens.resolve(&token))
            .unwrap_or_default()
    }
}

impl Stage for ContextBuilder {
    fn name(&self) -> &'static str {
        "context"
    }

    fn apply(&self, mut req: Request) -> Result<Request, AppError> {
        let id = req
            .extensions()
            .get::<PathParams>()
            .and_then(|params| params.get(ID_PARAM))
            .unwrap_or_default()
            .to_string();
        let username = self.username(&req);

        req.extensions_mut().insert(RequestCtx::new(id, username));
        Ok(req)
    }
}
