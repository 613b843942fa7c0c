use serde::Serialize;
use sqlx::{FromRow, PgPool};

/// User account row. The stored digest is never serialized out.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub fullname: String,
    pub role: String,
}

pub async fn find_all(db: &PgPool) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash, fullname, role
        FROM users
        ORDER BY id
        "#,
    )
    .fetch_all(db)
    .await
}

pub async fn find_by_id(db: &PgPool, id: i32) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash, fullname, role
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await
}

pub async fn find_by_username(db: &PgPool, username: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash, fullname, role
        FROM users
        WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(db)
    .await
}

pub async fn create(
    db: &PgPool,
    username: &str,
    password_hash: &str,
    fullname: &str,
    role: &str,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (username, password_hash, fullname, role)
        VALUES ($1, $2, $3, $4)
        RETURNING id, username, password_hash, fullname, role
        "#,
    )
    .bind(username)
    .bind(password_hash)
    .bind(fullname)
    .bind(role)
    .fetch_one(db)
    .await
}

pub async fn update(
    db: &PgPool,
    id: i32,
    username: &str,
    password_hash: &str,
    fullname: &str,
    role: &str,
) -> Result<Option<()>, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE users
        SET username = $2, password_hash = $3, fullname = $4, role = $5
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(username)
    .bind(password_hash)
    .bind(fullname)
    .bind(role)
    .execute(db)
    .await?;
    Ok((result.rows_affected() > 0).then_some(()))
}

pub async fn delete(db: &PgPool, id: i32) -> Result<Option<()>, sqlx::Error> {
    let result = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;
    Ok((result.rows_affected() > 0).then_some(()))
}
