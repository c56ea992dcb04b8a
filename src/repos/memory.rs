//! In-memory `Store` used by router tests in place of PostgreSQL.
//!
//! Mirrors the SQL semantics the handlers rely on: serial ids, unique user
//! names, cascading user deletes and the admin/self delete rules.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use super::{
    Store, StoreConn,
    blog_repo::{BlogFields, BlogRow},
    error::RepoError,
    order_repo::{OrderFields, OrderRow},
    product_repo::{ProductFields, ProductRow},
    user_repo::{UserFields, UserRow},
};

#[derive(Debug, Default)]
struct Tables {
    next_id: i32,
    users: Vec<UserRow>,
    blogs: Vec<BlogRow>,
    products: Vec<ProductRow>,
    orders: Vec<OrderRow>,
}

impl Tables {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }

    fn is_admin(&self, user_id: i32) -> bool {
        self.users.iter().any(|u| u.id == user_id && u.is_admin)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn acquire(&self) -> Result<Box<dyn StoreConn>, RepoError> {
        Ok(Box::new(MemoryConn {
            tables: self.tables.clone(),
        }))
    }
}

pub struct MemoryConn {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryConn {
    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap()
    }
}

fn replace<T: Clone>(rows: &mut [T], matches: impl Fn(&T) -> bool, new: T) -> Option<T> {
    let slot = rows.iter_mut().find(|r| matches(r))?;
    *slot = new;
    Some(slot.clone())
}

fn remove<T>(rows: &mut Vec<T>, matches: impl Fn(&T) -> bool) -> bool {
    let before = rows.len();
    rows.retain(|r| !matches(r));
    rows.len() != before
}

#[async_trait]
impl StoreConn for MemoryConn {
    async fn list_users(&mut self) -> Result<Vec<UserRow>, RepoError> {
        Ok(self.tables().users.clone())
    }

    async fn get_user(&mut self, id: i32) -> Result<Option<UserRow>, RepoError> {
        Ok(self.tables().users.iter().find(|u| u.id == id).cloned())
    }

    async fn get_user_by_name(&mut self, name: &str) -> Result<Option<UserRow>, RepoError> {
        Ok(self.tables().users.iter().find(|u| u.name == name).cloned())
    }

    async fn create_user(&mut self, fields: &UserFields) -> Result<UserRow, RepoError> {
        let mut t = self.tables();
        if t.users.iter().any(|u| u.name == fields.name) {
            return Err(RepoError::Conflict);
        }
        let row = UserRow {
            id: t.next_id(),
            name: fields.name.clone(),
            password: fields.password_hash.clone(),
            email: fields.email.clone(),
            is_admin: fields.is_admin,
        };
        t.users.push(row.clone());
        Ok(row)
    }

    async fn update_user(
        &mut self,
        id: i32,
        fields: &UserFields,
    ) -> Result<Option<UserRow>, RepoError> {
        let mut t = self.tables();
        if t.users.iter().any(|u| u.name == fields.name && u.id != id) {
            return Err(RepoError::Conflict);
        }
        let row = UserRow {
            id,
            name: fields.name.clone(),
            password: fields.password_hash.clone(),
            email: fields.email.clone(),
            is_admin: fields.is_admin,
        };
        Ok(replace(&mut t.users, |u| u.id == id, row))
    }

    async fn delete_user(&mut self, id: i32, requester_id: i32) -> Result<bool, RepoError> {
        let mut t = self.tables();
        if requester_id != id && !t.is_admin(requester_id) {
            return Ok(false);
        }
        if !t.users.iter().any(|u| u.id == requester_id) {
            return Ok(false);
        }
        let removed = remove(&mut t.users, |u| u.id == id);
        if removed {
            t.blogs.retain(|b| b.user_id != id);
            t.orders.retain(|o| o.user_id != id);
        }
        Ok(removed)
    }

    async fn list_blogs(&mut self) -> Result<Vec<BlogRow>, RepoError> {
        Ok(self.tables().blogs.clone())
    }

    async fn get_blog(&mut self, id: i32) -> Result<Option<BlogRow>, RepoError> {
        Ok(self.tables().blogs.iter().find(|b| b.id == id).cloned())
    }

    async fn create_blog(&mut self, fields: &BlogFields) -> Result<BlogRow, RepoError> {
        let mut t = self.tables();
        let row = BlogRow {
            id: t.next_id(),
            title: fields.title.clone(),
            content: fields.content.clone(),
            user_id: fields.user_id,
            path: fields.path.clone(),
        };
        t.blogs.push(row.clone());
        Ok(row)
    }

    async fn update_blog(
        &mut self,
        id: i32,
        fields: &BlogFields,
    ) -> Result<Option<BlogRow>, RepoError> {
        let row = BlogRow {
            id,
            title: fields.title.clone(),
            content: fields.content.clone(),
            user_id: fields.user_id,
            path: fields.path.clone(),
        };
        Ok(replace(&mut self.tables().blogs, |b| b.id == id, row))
    }

    async fn delete_blog(&mut self, id: i32) -> Result<bool, RepoError> {
        Ok(remove(&mut self.tables().blogs, |b| b.id == id))
    }

    async fn list_products(&mut self) -> Result<Vec<ProductRow>, RepoError> {
        Ok(self.tables().products.clone())
    }

    async fn get_product(&mut self, id: i32) -> Result<Option<ProductRow>, RepoError> {
        Ok(self.tables().products.iter().find(|p| p.id == id).cloned())
    }

    async fn create_product(&mut self, fields: &ProductFields) -> Result<ProductRow, RepoError> {
        let mut t = self.tables();
        let row = ProductRow {
            id: t.next_id(),
            name: fields.name.clone(),
            price: round_cents(fields.price),
            image_url: fields.image_url.clone(),
            is_available: fields.is_available,
        };
        t.products.push(row.clone());
        Ok(row)
    }

    async fn update_product(
        &mut self,
        id: i32,
        fields: &ProductFields,
    ) -> Result<Option<ProductRow>, RepoError> {
        let row = ProductRow {
            id,
            name: fields.name.clone(),
            price: round_cents(fields.price),
            image_url: fields.image_url.clone(),
            is_available: fields.is_available,
        };
        Ok(replace(&mut self.tables().products, |p| p.id == id, row))
    }

    async fn delete_product(&mut self, id: i32, requester_id: i32) -> Result<bool, RepoError> {
        let mut t = self.tables();
        if !t.is_admin(requester_id) {
            return Ok(false);
        }
        Ok(remove(&mut t.products, |p| p.id == id))
    }

    async fn list_orders(&mut self) -> Result<Vec<OrderRow>, RepoError> {
        Ok(self.tables().orders.clone())
    }

    async fn get_order(&mut self, id: i32) -> Result<Option<OrderRow>, RepoError> {
        Ok(self.tables().orders.iter().find(|o| o.id == id).cloned())
    }

    async fn create_order(&mut self, fields: &OrderFields) -> Result<OrderRow, RepoError> {
        let mut t = self.tables();
        let row = OrderRow {
            id: t.next_id(),
            address: fields.address.clone(),
            user_id: fields.user_id,
            is_completed: fields.is_completed,
        };
        t.orders.push(row.clone());
        Ok(row)
    }

    async fn update_order(
        &mut self,
        id: i32,
        fields: &OrderFields,
    ) -> Result<Option<OrderRow>, RepoError> {
        let row = OrderRow {
            id,
            address: fields.address.clone(),
            user_id: fields.user_id,
            is_completed: fields.is_completed,
        };
        Ok(replace(&mut self.tables().orders, |o| o.id == id, row))
    }

    async fn delete_order(&mut self, id: i32) -> Result<bool, RepoError> {
        Ok(remove(&mut self.tables().orders, |o| o.id == id))
    }
}

fn round_cents(price: f64) -> f64 {
    (price * 100.0).round() / 100.0
}
