/*
 * Responsibility
 * - SQLx operations on the users table
 * - Takes a single PgConnection owned by the current request
 */
use sqlx::{FromRow, PgConnection};

use crate::repos::error::RepoError;

#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: i32,
    pub name: String,
    /// bcrypt hash, never leaves the server
    pub password: String,
    pub email: String,
    pub is_admin: bool,
}

#[derive(Debug, Clone)]
pub struct UserFields {
    pub name: String,
    pub password_hash: String,
    pub email: String,
    pub is_admin: bool,
}

pub async fn list(conn: &mut PgConnection) -> Result<Vec<UserRow>, RepoError> {
    let rows = sqlx::query_as::<_, UserRow>(
        r#"
        SELECT id, name, password, email, is_admin
        FROM users
        ORDER BY id
        "#,
    )
    .fetch_all(&mut *conn)
    .await?;

    Ok(rows)
}

pub async fn get(conn: &mut PgConnection, id: i32) -> Result<Option<UserRow>, RepoError> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        SELECT id, name, password, email, is_admin
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(row)
}

pub async fn get_by_name(
    conn: &mut PgConnection,
    name: &str,
) -> Result<Option<UserRow>, RepoError> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        SELECT id, name, password, email, is_admin
        FROM users
        WHERE name = $1
        "#,
    )
    .bind(name)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(row)
}

pub async fn create(conn: &mut PgConnection, fields: &UserFields) -> Result<UserRow, RepoError> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        INSERT INTO users (name, password, email, is_admin)
        VALUES ($1, $2, $3, $4)
        RETURNING id, name, password, email, is_admin
        "#,
    )
    .bind(&fields.name)
    .bind(&fields.password_hash)
    .bind(&fields.email)
    .bind(fields.is_admin)
    .fetch_one(&mut *conn)
    .await
    .map_err(RepoError::from_sqlx)?;

    Ok(row)
}

pub async fn update(
    conn: &mut PgConnection,
    id: i32,
    fields: &UserFields,
) -> Result<Option<UserRow>, RepoError> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        UPDATE users
        SET name = $2, password = $3, email = $4, is_admin = $5
        WHERE id = $1
        RETURNING id, name, password, email, is_admin
        "#,
    )
    .bind(id)
    .bind(&fields.name)
    .bind(&fields.password_hash)
    .bind(&fields.email)
    .bind(fields.is_admin)
    .fetch_optional(&mut *conn)
    .await
    .map_err(RepoError::from_sqlx)?;

    Ok(row)
}

/// Deletes `id` only when `requester_id` is that user or an admin.
pub async fn delete(
    conn: &mut PgConnection,
    id: i32,
    requester_id: i32,
) -> Result<bool, RepoError> {
    let result = sqlx::query(
        r#"
        DELETE FROM users
        WHERE id = $1
          AND EXISTS (
              SELECT 1 FROM users r
              WHERE r.id = $2 AND (r.is_admin OR r.id = $1)
          )
        "#,
    )
    .bind(id)
    .bind(requester_id)
    .execute(&mut *conn)
    .await?;

    Ok(result.rows_affected() > 0)
}
