/*
 * Responsibility
 * - Users request/response DTOs
 * - The password hash never appears in a response
 */
use serde::{Deserialize, Serialize};

use crate::repos::user_repo::UserRow;

#[derive(Debug, Deserialize)]
pub struct UserRequest {
    pub name: String,
    pub password: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
}

impl UserRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("name is required");
        }
        if self.password.is_empty() {
            return Err("password is required");
        }
        if self.password.len() > 72 {
            return Err("password must be <= 72 bytes");
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
}

impl From<UserRow> for UserResponse {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            is_admin: row.is_admin,
        }
    }
}
