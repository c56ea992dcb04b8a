use sqlx::{FromRow, PgConnection};

use crate::repos::error::RepoError;

#[derive(Debug, Clone, FromRow)]
pub struct OrderRow {
    pub id: i32,
    pub address: String,
    pub user_id: i32,
    pub is_completed: bool,
}

#[derive(Debug, Clone)]
pub struct OrderFields {
    pub address: String,
    pub user_id: i32,
    pub is_completed: bool,
}

pub async fn list(conn: &mut PgConnection) -> Result<Vec<OrderRow>, RepoError> {
    let rows = sqlx::query_as::<_, OrderRow>(
        r#"
        SELECT id, address, user_id, is_completed
        FROM orders
        ORDER BY id
        "#,
    )
    .fetch_all(&mut *conn)
    .await?;

    Ok(rows)
}

pub async fn get(conn: &mut PgConnection, id: i32) -> Result<Option<OrderRow>, RepoError> {
    let row = sqlx::query_as::<_, OrderRow>(
        r#"
        SELECT id, address, user_id, is_completed
        FROM orders
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(row)
}

pub async fn create(conn: &mut PgConnection, fields: &OrderFields) -> Result<OrderRow, RepoError> {
    let row = sqlx::query_as::<_, OrderRow>(
        r#"
        INSERT INTO orders (address, user_id, is_completed)
        VALUES ($1, $2, $3)
        RETURNING id, address, user_id, is_completed
        "#,
    )
    .bind(&fields.address)
    .bind(fields.user_id)
    .bind(fields.is_completed)
    .fetch_one(&mut *conn)
    .await?;

    Ok(row)
}

pub async fn update(
    conn: &mut PgConnection,
    id: i32,
    fields: &OrderFields,
) -> Result<Option<OrderRow>, RepoError> {
    let row = sqlx::query_as::<_, OrderRow>(
        r#"
        UPDATE orders
        SET address = $2, user_id = $3, is_completed = $4
        WHERE id = $1
        RETURNING id, address, user_id, is_completed
        "#,
    )
    .bind(id)
    .bind(&fields.address)
    .bind(fields.user_id)
    .bind(fields.is_completed)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(row)
}

pub async fn delete(conn: &mut PgConnection, id: i32) -> Result<bool, RepoError> {
    let result = sqlx::query(
        r#"
        DELETE FROM orders
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(&mut *conn)
    .await?;

    Ok(result.rows_affected() > 0)
}
