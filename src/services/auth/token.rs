//! Identity token codec (HS256 JWT).
//!
//! One codec instance is built at start-up from `TokenConfig` and shared by
//! every request. It serves two kinds of callers:
//! - the auth gate, which needs to know *why* a token failed (`verify`)
//! - best-effort identity lookup, which only cares about the username (`resolve`)

use std::time::Duration;

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, errors::ErrorKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::config::TokenConfig;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    username: String,
    exp: i64,
    iat: i64,
    jti: String,
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token secret must not be empty")]
    EmptySecret,
    #[error("failed to sign token: {0}")]
    Sign(#[from] jsonwebtoken::errors::Error),
}

/// Why a presented token was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenFailure {
    /// Not a token at all (bad structure, base64 or JSON).
    Malformed,
    BadSignature,
    Expired,
    /// Parsed and signed by us, but failed some other validation.
    Rejected,
}

impl TokenFailure {
    fn from_jwt(e: &jsonwebtoken::errors::Error) -> Self {
        match e.kind() {
            ErrorKind::InvalidToken
            | ErrorKind::Base64(_)
            | ErrorKind::Json(_)
            | ErrorKind::Utf8(_) => Self::Malformed,
            ErrorKind::InvalidSignature => Self::BadSignature,
            ErrorKind::ExpiredSignature => Self::Expired,
            _ => Self::Rejected,
        }
    }
}

#[derive(Debug, Clone)]
pub struct VerifiedToken {
    pub username: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("TokenCodec")
            .field("ttl", &self.ttl)
            .field("leeway", &self.validation.leeway)
            .finish()
    }
}

impl TokenCodec {
    pub fn new(config: &TokenConfig) -> Result<Self, TokenError> {
        if config.secret.is_empty() {
            return Err(TokenError::EmptySecret);
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = config.leeway_seconds;
        validation.set_required_spec_claims(&["exp"]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            ttl: config.ttl,
        })
    }

    /// Sign a token binding `username` to the absolute instant `expires_at`.
    pub fn issue(&self, username: &str, expires_at: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = Claims {
            username: username.to_string(),
            exp: expires_at.timestamp(),
            iat: Utc::now().timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        let token = jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;
        Ok(token)
    }

    /// Sign a token that expires after the configured TTL.
    pub fn issue_now(&self, username: &str) -> Result<IssuedToken, TokenError> {
        let ttl = chrono::Duration::from_std(self.ttl).unwrap_or(chrono::Duration::minutes(5));
        let expires_at = Utc::now() + ttl;
        let token = self.issue(username, expires_at)?;
        Ok(IssuedToken { token, expires_at })
    }

    pub fn verify(&self, token: &str) -> Result<VerifiedToken, TokenFailure> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                let failure = TokenFailure::from_jwt(&e);
                debug!(error = %e, ?failure, "token verification failed");
                failure
            })?;

        let expires_at =
            DateTime::from_timestamp(data.claims.exp, 0).ok_or(TokenFailure::Rejected)?;

        Ok(VerifiedToken {
            username: data.claims.username,
            expires_at,
        })
    }

    /// Best-effort lookup: the username of a valid token, `None` for anything else.
    pub fn resolve(&self, token: &str) -> Option<String> {
        self.verify(token).ok().map(|v| v.username)
    }
}
