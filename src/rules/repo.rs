use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RuleName {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub json: String,
    pub template: String,
    pub sql_str: String,
    pub sql_part: String,
}

pub async fn find_all(db: &PgPool) -> Result<Vec<RuleName>, sqlx::Error> {
    sqlx::query_as::<_, RuleName>(
        r#"
        SELECT id, name, description, json, template, sql_str, sql_part
        FROM rule_name
        ORDER BY id
        "#,
    )
    .fetch_all(db)
    .await
}

pub async fn find_by_id(db: &PgPool, id: i32) -> Result<Option<RuleName>, sqlx::Error> {
    sqlx::query_as::<_, RuleName>(
        r#"
        SELECT id, name, description, json, template, sql_str, sql_part
        FROM rule_name
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await
}

#[allow(clippy::too_many_arguments)]
pub async fn create(
    db: &PgPool,
    name: &str,
    description: &str,
    json: &str,
    template: &str,
    sql_str: &str,
    sql_part: &str,
) -> Result<RuleName, sqlx::Error> {
    sqlx::query_as::<_, RuleName>(
        r#"
        INSERT INTO rule_name (name, description, json, template, sql_str, sql_part)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, name, description, json, template, sql_str, sql_part
        "#,
    )
    .bind(name)
    .bind(description)
    .bind(json)
    .bind(template)
    .bind(sql_str)
    .bind(sql_part)
    .fetch_one(db)
    .await
}

#[allow(clippy::too_many_arguments)]
pub async fn update(
    db: &PgPool,
    id: i32,
    name: &str,
    description: &str,
    json: &str,
    template: &str,
    sql_str: &str,
    sql_part: &str,
) -> Result<Option<()>, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE rule_name
        SET name = $2, description = $3, json = $4, template = $5, sql_str = $6, sql_part = $7
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(description)
    .bind(json)
    .bind(template)
    .bind(sql_str)
    .bind(sql_part)
    .execute(db)
    .await?;
    Ok((result.rows_affected() > 0).then_some(()))
}

pub async fn delete(db: &PgPool, id: i32) -> Result<Option<()>, sqlx::Error> {
    let result = sqlx::query("DELETE FROM rule_name WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;
    Ok((result.rows_affected() > 0).then_some(()))
}
