/*
 * Responsibility
 * - Login / sign-up request and response DTOs
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct SignUpRequest {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub email: String,
}

impl SignUpRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.username.trim().is_empty() {
            return Err("username is required");
        }
        if self.password.is_empty() {
            return Err("password is required");
        }
        // bcrypt only looks at the first 72 bytes
        if self.password.len() > 72 {
            return Err("password must be <= 72 bytes");
        }
        Ok(())
    }
}

/// Body returned alongside the `token` cookie.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub username: String,
    pub expires_at: DateTime<Utc>,
}
