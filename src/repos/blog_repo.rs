/*
 * Responsibility
 * - blogs CRUD
 * - user_id FK is ON DELETE CASCADE, so removing a user removes their blogs
 */
use sqlx::{FromRow, PgConnection};

use crate::repos::error::RepoError;

#[derive(Debug, Clone, FromRow)]
pub struct BlogRow {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub user_id: i32,
    pub path: String,
}

#[derive(Debug, Clone)]
pub struct BlogFields {
    pub title: String,
    pub content: String,
    pub path: String,
    pub user_id: i32,
}

pub async fn list(conn: &mut PgConnection) -> Result<Vec<BlogRow>, RepoError> {
    let rows = sqlx::query_as::<_, BlogRow>(
        r#"
        SELECT id, title, content, user_id, path
        FROM blogs
        ORDER BY id
        "#,
    )
    .fetch_all(&mut *conn)
    .await?;

    Ok(rows)
}

pub async fn get(conn: &mut PgConnection, id: i32) -> Result<Option<BlogRow>, RepoError> {
    let row = sqlx::query_as::<_, BlogRow>(
        r#"
        SELECT id, title, content, user_id, path
        FROM blogs
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(row)
}

pub async fn create(conn: &mut PgConnection, fields: &BlogFields) -> Result<BlogRow, RepoError> {
    let row = sqlx::query_as::<_, BlogRow>(
        r#"
        INSERT INTO blogs (title, content, user_id, path)
        VALUES ($1, $2, $3, $4)
        RETURNING id, title, content, user_id, path
        "#,
    )
    .bind(&fields.title)
    .bind(&fields.content)
    .bind(fields.user_id)
    .bind(&fields.path)
    .fetch_one(&mut *conn)
    .await?;

    Ok(row)
}

pub async fn update(
    conn: &mut PgConnection,
    id: i32,
    fields: &BlogFields,
) -> Result<Option<BlogRow>, RepoError> {
    let row = sqlx::query_as::<_, BlogRow>(
        r#"
        UPDATE blogs
        SET title = $2, content = $3, user_id = $4, path = $5
        WHERE id = $1
        RETURNING id, title, content, user_id, path
        "#,
    )
    .bind(id)
    .bind(&fields.title)
    .bind(&fields.content)
    .bind(fields.user_id)
    .bind(&fields.path)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(row)
}

pub async fn delete(conn: &mut PgConnection, id: i32) -> Result<bool, RepoError> {
    let result = sqlx::query(
        r#"
        DELETE FROM blogs
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(&mut *conn)
    .await?;

    Ok(result.rows_affected() > 0)
}
