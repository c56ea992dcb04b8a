/*
 * Responsibility
 * - The persistence seam handlers talk to (Store / StoreConn)
 * - One StoreConn per request: acquired at the top of a handler, dropped on
 *   every exit path
 * - Row types and SQL live in the *_repo modules
 */
use async_trait::async_trait;

pub mod blog_repo;
pub mod error;
#[cfg(test)]
pub mod memory;
pub mod order_repo;
pub mod postgres;
pub mod product_repo;
pub mod user_repo;

use blog_repo::{BlogFields, BlogRow};
use error::RepoError;
use order_repo::{OrderFields, OrderRow};
use product_repo::{ProductFields, ProductRow};
use user_repo::{UserFields, UserRow};

#[async_trait]
pub trait Store: Send + Sync {
    async fn acquire(&self) -> Result<Box<dyn StoreConn>, RepoError>;
}

/// Record CRUD keyed by integer id.
///
/// - lookups and updates return `None` when no row matched
/// - deletes return whether a row was removed
#[async_trait]
pub trait StoreConn: Send {
    async fn list_users(&mut self) -> Result<Vec<UserRow>, RepoError>;
    async fn get_user(&mut self, id: i32) -> Result<Option<UserRow>, RepoError>;
    async fn get_user_by_name(&mut self, name: &str) -> Result<Option<UserRow>, RepoError>;
    async fn create_user(&mut self, fields: &UserFields) -> Result<UserRow, RepoError>;
    async fn update_user(
        &mut self,
        id: i32,
        fields: &UserFields,
    ) -> Result<Option<UserRow>, RepoError>;
    async fn delete_user(&mut self, id: i32, requester_id: i32) -> Result<bool, RepoError>;

    async fn list_blogs(&mut self) -> Result<Vec<BlogRow>, RepoError>;
    async fn get_blog(&mut self, id: i32) -> Result<Option<BlogRow>, RepoError>;
    async fn create_blog(&mut self, fields: &BlogFields) -> Result<BlogRow, RepoError>;
    async fn update_blog(
        &mut self,
        id: i32,
        fields: &BlogFields,
    ) -> Result<Option<BlogRow>, RepoError>;
    async fn delete_blog(&mut self, id: i32) -> Result<bool, RepoError>;

    async fn list_products(&mut self) -> Result<Vec<ProductRow>, RepoError>;
    async fn get_product(&mut self, id: i32) -> Result<Option<ProductRow>, RepoError>;
    async fn create_product(&mut self, fields: &ProductFields) -> Result<ProductRow, RepoError>;
    async fn update_product(
        &mut self,
        id: i32,
        fields: &ProductFields,
    ) -> Result<Option<ProductRow>, RepoError>;
    async fn delete_product(&mut self, id: i32, requester_id: i32) -> Result<bool, RepoError>;

    async fn list_orders(&mut self) -> Result<Vec<OrderRow>, RepoError>;
    async fn get_order(&mut self, id: i32) -> Result<Option<OrderRow>, RepoError>;
    async fn create_order(&mut self, fields: &OrderFields) -> Result<OrderRow, RepoError>;
    async fn update_order(
        &mut self,
        id: i32,
        fields: &OrderFields,
    ) -> Result<Option<OrderRow>, RepoError>;
    async fn delete_order(&mut self, id: i32) -> Result<bool, RepoError>;
}
