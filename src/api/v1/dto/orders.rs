/*
 * Responsibility
 * - Orders request/response DTOs
 */
use serde::{Deserialize, Serialize};

use crate::repos::order_repo::{OrderFields, OrderRow};

#[derive(Debug, Deserialize)]
pub struct OrderRequest {
    pub address: String,
    #[serde(default)]
    pub is_completed: bool,
}

impl OrderRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.address.trim().is_empty() {
            return Err("address is required");
        }
        Ok(())
    }

    pub fn into_fields(self, user_id: i32) -> OrderFields {
        OrderFields {
            address: self.address,
            user_id,
            is_completed: self.is_completed,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub id: i32,
    pub address: String,
    pub user_id: i32,
    pub is_completed: bool,
}

impl From<OrderRow> for OrderResponse {
    fn from(row: OrderRow) -> Self {
        Self {
            id: row.id,
            address: row.address,
            user_id: row.user_id,
            is_completed: row.is_completed,
        }
    }
}
