/*
 * Responsibility
 * - Products request/response DTOs
 */
use serde::{Deserialize, Serialize};

use crate::repos::product_repo::{ProductFields, ProductRow};

#[derive(Debug, Deserialize)]
pub struct ProductRequest {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub is_available: bool,
}

impl ProductRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("name is required");
        }
        // NUMERIC(10,2), checked after rounding to cents as the column does
        let cents = (self.price * 100.0).round();
        if !cents.is_finite() || cents < 0.0 || cents >= 1e10 {
            return Err("price must be between 0 and 99999999.99");
        }
        Ok(())
    }
}

impl From<ProductRequest> for ProductFields {
    fn from(req: ProductRequest) -> Self {
        Self {
            name: req.name,
            price: req.price,
            image_url: req.image_url,
            is_available: req.is_available,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub image_url: String,
    pub is_available: bool,
}

impl From<ProductRow> for ProductResponse {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            price: row.price,
            image_url: row.image_url,
            is_available: row.is_available,
        }
    }
}
