/*
 * Responsibility
 * - Blogs request/response DTOs
 * - user_id is never taken from the body; it is the caller
 */
use serde::{Deserialize, Serialize};

use crate::repos::blog_repo::{BlogFields, BlogRow};

#[derive(Debug, Deserialize)]
pub struct BlogRequest {
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub path: String,
}

impl BlogRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.trim().is_empty() {
            return Err("title is required");
        }
        Ok(())
    }

    pub fn into_fields(self, user_id: i32) -> BlogFields {
        BlogFields {
            title: self.title,
            content: self.content,
            path: self.path,
            user_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BlogResponse {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub user_id: i32,
    pub path: String,
}

impl From<BlogRow> for BlogResponse {
    fn from(row: BlogRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            content: row.content,
            user_id: row.user_id,
            path: row.path,
        }
    }
}
