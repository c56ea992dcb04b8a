//! PostgreSQL-backed `Store`.
//!
//! There is no pool: `acquire` opens a fresh connection for the request and the
//! connection is closed when the returned `PgConn` is dropped.

use async_trait::async_trait;
use sqlx::{ConnectOptions, PgConnection, postgres::PgConnectOptions};

use super::{
    Store, StoreConn,
    blog_repo::{self, BlogFields, BlogRow},
    error::RepoError,
    order_repo::{self, OrderFields, OrderRow},
    product_repo::{self, ProductFields, ProductRow},
    user_repo::{self, UserFields, UserRow},
};

#[derive(Debug, Clone)]
pub struct PgStore {
    options: PgConnectOptions,
}

impl PgStore {
    pub fn new(options: PgConnectOptions) -> Self {
        Self { options }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn acquire(&self) -> Result<Box<dyn StoreConn>, RepoError> {
        let conn = self.options.connect().await?;
        Ok(Box::new(PgConn { conn }))
    }
}

pub struct PgConn {
    conn: PgConnection,
}

#[async_trait]
impl StoreConn for PgConn {
    async fn list_users(&mut self) -> Result<Vec<UserRow>, RepoError> {
        user_repo::list(&mut self.conn).await
    }

    async fn get_user(&mut self, id: i32) -> Result<Option<UserRow>, RepoError> {
        user_repo::get(&mut self.conn, id).await
    }

    async fn get_user_by_name(&mut self, name: &str) -> Result<Option<UserRow>, RepoError> {
        user_repo::get_by_name(&mut self.conn, name).await
    }

    async fn create_user(&mut self, fields: &UserFields) -> Result<UserRow, RepoError> {
        user_repo::create(&mut self.conn, fields).await
    }

    async fn update_user(
        &mut self,
        id: i32,
        fields: &UserFields,
    ) -> Result<Option<UserRow>, RepoError> {
        user_repo::update(&mut self.conn, id, fields).await
    }

    async fn delete_user(&mut self, id: i32, requester_id: i32) -> Result<bool, RepoError> {
        user_repo::delete(&mut self.conn, id, requester_id).await
    }

    async fn list_blogs(&mut self) -> Result<Vec<BlogRow>, RepoError> {
        blog_repo::list(&mut self.conn).await
    }

    async fn get_blog(&mut self, id: i32) -> Result<Option<BlogRow>, RepoError> {
        blog_repo::get(&mut self.conn, id).await
    }

    async fn create_blog(&mut self, fields: &BlogFields) -> Result<BlogRow, RepoError> {
        blog_repo::create(&mut self.conn, fields).await
    }

    async fn update_blog(
        &mut self,
        id: i32,
        fields: &BlogFields,
    ) -> Result<Option<BlogRow>, RepoError> {
        blog_repo::update(&mut self.conn, id, fields).await
    }

    async fn delete_blog(&mut self, id: i32) -> Result<bool, RepoError> {
        blog_repo::delete(&mut self.conn, id).await
    }

    async fn list_products(&mut self) -> Result<Vec<ProductRow>, RepoError> {
        product_repo::list(&mut self.conn).await
    }

    async fn get_product(&mut self, id: i32) -> Result<Option<ProductRow>, RepoError> {
        product_repo::get(&mut self.conn, id).await
    }

    async fn create_product(&mut self, fields: &ProductFields) -> Result<ProductRow, RepoError> {
        product_repo::create(&mut self.conn, fields).await
    }

    async fn update_product(
        &mut self,
        id: i32,
        fields: &ProductFields,
    ) -> Result<Option<ProductRow>, RepoError> {
        product_repo::update(&mut self.conn, id, fields).await
    }

    async fn delete_product(&mut self, id: i32, requester_id: i32) -> Result<bool, RepoError> {
        product_repo::delete(&mut self.conn, id, requester_id).await
    }

    async fn list_orders(&mut self) -> Result<Vec<OrderRow>, RepoError> {
        order_repo::list(&mut self.conn).await
    }

    async fn get_order(&mut self, id: i32) -> Result<Option<OrderRow>, RepoError> {
        order_repo::get(&mut self.conn, id).await
    }

    async fn create_order(&mut self, fields: &OrderFields) -> Result<OrderRow, RepoError> {
        order_repo::create(&mut self.conn, fields).await
    }

    async fn update_order(
        &mut self,
        id: i32,
        fields: &OrderFields,
    ) -> Result<Option<OrderRow>, RepoError> {
        order_repo::update(&mut self.conn, id, fields).await
    }

    async fn delete_order(&mut self, id: i32) -> Result<bool, RepoError> {
        order_repo::delete(&mut self.conn, id).await
    }
}
