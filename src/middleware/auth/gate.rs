//! Auth gate: requires a valid `token` cookie before anything else runs.
//!
//! - no cookie: 401
//! - cookie present but not a parseable token (including empty): 400
//! - parseable but bad signature, expired, or otherwise invalid: 401
//!
//! On success the request is handed on untouched.

use std::sync::Arc;

use axum::extract::Request;

use super::{
    cookie::{self, TOKEN_COOKIE},
    pipeline::Stage,
};
use crate::{
    error::AppError,
    services::auth::{TokenCodec, TokenFailure},
};

pub struct AuthGate {
    tokens: Arc<TokenCodec>,
}

impl AuthGate {
    pub fn new(tokens: Arc<TokenCodec>) -> Self {
        Self { tokens }
    }
}

impl Stage for AuthGate {
    fn name(&self) -> &'static str {
        "auth_gate"
    }

    fn apply(&self, req: Request) -> Result<Request, AppError> {
        let token = match cookie::read(req.headers(), TOKEN_COOKIE) {
            Ok(Some(token)) => token,
            Ok(None) => {
                tracing::debug!("token cookie missing");
                return Err(AppError::Unauthorized);
            }
            Err(_) => {
                tracing::debug!("cookie header unreadable");
                return Err(AppError::bad_request("malformed token"));
            }
        };

        match self.tokens.verify(&token) {
            Ok(verified) => {
                tracing::debug!(
                    username = %verified.username,
                    expires_at = %verified.expires_at,
                    "token accepted"
                );
                Ok(req)
            }
            Err(TokenFailure::Malformed) => Err(AppError::bad_request("malformed token")),
            Err(failure) => {
                tracing::info!(?failure, "token rejected");
                Err(AppError::Unauthorized)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::{
        body::Body,
        http::{StatusCode, header::COOKIE},
    };
    use chrono::Utc;

    use super::*;
    use crate::config::TokenConfig;

    fn codec(secret: &str) -> Arc<TokenCodec> {
        Arc::new(
            TokenCodec::new(&TokenConfig {
                secret: secret.to_string(),
                ttl: Duration::from_secs(300),
                leeway_seconds: 0,
            })
            .unwrap(),
        )
    }

    fn request(cookie: Option<&str>) -> Request {
        let mut b = Request::builder().uri("/api/v1/order");
        if let Some(c) = cookie {
            b = b.header(COOKIE, c);
        }
        b.body(Body::empty()).unwrap()
    }

    fn status(gate: &AuthGate, cookie: Option<&str>) -> Option<StatusCode> {
        gate.apply(request(cookie)).err().map(|e| e.status())
    }

    #[test]
    fn missing_cookie_is_unauthorized() {
        let gate = AuthGate::new(codec("s3cret"));
        assert_eq!(status(&gate, None), Some(StatusCode::UNAUTHORIZED));
        assert_eq!(
            status(&gate, Some("theme=dark")),
            Some(StatusCode::UNAUTHORIZED)
        );
    }

    #[test]
    fn unparseable_token_is_bad_request() {
        let gate = AuthGate::new(codec("s3cret"));
        assert_eq!(
            status(&gate, Some("token=not-a-jwt")),
            Some(StatusCode::BAD_REQUEST)
        );
        assert_eq!(status(&gate, Some("token=")), Some(StatusCode::BAD_REQUEST));
    }

    #[test]
    fn expired_token_is_unauthorized() {
        let tokens = codec("s3cret");
        let token = tokens
            .issue("alice", Utc::now() - chrono::Duration::seconds(60))
            .unwrap();
        let gate = AuthGate::new(tokens);
        assert_eq!(
            status(&gate, Some(&format!("token={token}"))),
            Some(StatusCode::UNAUTHORIZED)
        );
    }

    #[test]
    fn foreign_signature_is_unauthorized() {
        let token = codec("other").issue_now("alice").unwrap().token;
        let gate = AuthGate::new(codec("s3cret"));
        assert_eq!(
            status(&gate, Some(&format!("token={token}"))),
            Some(StatusCode::UNAUTHORIZED)
        );
    }

    #[test]
    fn valid_token_passes_request_through_unchanged() {
        let tokens = codec("s3cret");
        let token = tokens.issue_now("alice").unwrap().token;
        let gate = AuthGate::new(tokens);

        let req = gate.apply(request(Some(&format!("token={token}")))).unwrap();
        assert_eq!(req.uri().path(), "/api/v1/order");
        assert!(req.headers().contains_key(COOKIE));
        assert!(req.extensions().is_empty());
    }
}
