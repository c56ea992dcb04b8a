/*
 * Responsibility
 * - products CRUD
 * - price is NUMERIC(10,2) in the table and f64 on the Rust side; the casts live
 *   in the SQL so no decimal crate is needed
 */
use sqlx::{FromRow, PgConnection};

use crate::repos::error::RepoError;

#[derive(Debug, Clone, FromRow)]
pub struct ProductRow {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub image_url: String,
    pub is_available: bool,
}

#[derive(Debug, Clone)]
pub struct ProductFields {
    pub name: String,
    pub price: f64,
    pub image_url: String,
    pub is_available: bool,
}

pub async fn list(conn: &mut PgConnection) -> Result<Vec<ProductRow>, RepoError> {
    let rows = sqlx::query_as::<_, ProductRow>(
        r#"
        SELECT id, name, price::float8 AS price, image_url, is_available
        FROM products
        ORDER BY id
        "#,
    )
    .fetch_all(&mut *conn)
    .await?;

    Ok(rows)
}

pub async fn get(conn: &mut PgConnection, id: i32) -> Result<Option<ProductRow>, RepoError> {
    let row = sqlx::query_as::<_, ProductRow>(
        r#"
        SELECT id, name, price::float8 AS price, image_url, is_available
        FROM products
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(row)
}

pub async fn create(
    conn: &mut PgConnection,
    fields: &ProductFields,
) -> Result<ProductRow, RepoError> {
    let row = sqlx::query_as::<_, ProductRow>(
        r#"
        INSERT INTO products (name, price, image_url, is_available)
        VALUES ($1, ROUND($2::numeric, 2), $3, $4)
        RETURNING id, name, price::float8 AS price, image_url, is_available
        "#,
    )
    .bind(&fields.name)
    .bind(fields.price)
    .bind(&fields.image_url)
    .bind(fields.is_available)
    .fetch_one(&mut *conn)
    .await?;

    Ok(row)
}

pub async fn update(
    conn: &mut PgConnection,
    id: i32,
    fields: &ProductFields,
) -> Result<Option<ProductRow>, RepoError> {
    let row = sqlx::query_as::<_, ProductRow>(
        r#"
        UPDATE products
        SET name = $2, price = ROUND($3::numeric, 2), image_url = $4, is_available = $5
        WHERE id = $1
        RETURNING id, name, price::float8 AS price, image_url, is_available
        "#,
    )
    .bind(id)
    .bind(&fields.name)
    .bind(fields.price)
    .bind(&fields.image_url)
    .bind(fields.is_available)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(row)
}

/// Only admins may remove products; for anyone else nothing matches.
pub async fn delete(
    conn: &mut PgConnection,
    id: i32,
    requester_id: i32,
) -> Result<bool, RepoError> {
    let result = sqlx::query(
        r#"
        DELETE FROM products
        WHERE id = $1
          AND EXISTS (SELECT 1 FROM users WHERE id = $2 AND is_admin)
        "#,
    )
    .bind(id)
    .bind(requester_id)
    .execute(&mut *conn)
    .await?;

    Ok(result.rows_affected() > 0)
}
