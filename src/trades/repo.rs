use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Trade {
    pub id: i32,
    pub account: String,
    pub trade_type: String,
    pub buy_quantity: f64,
}

pub async fn find_all(db: &PgPool) -> Result<Vec<Trade>, sqlx::Error> {
    sqlx::query_as::<_, Trade>(
        "SELECT id, account, trade_type, buy_quantity FROM trade ORDER BY id",
    )
    .fetch_all(db)
    .await
}

pub async fn find_by_id(db: &PgPool, id: i32) -> Result<Option<Trade>, sqlx::Error> {
    sqlx::query_as::<_, Trade>(
        "SELECT id, account, trade_type, buy_quantity FROM trade WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(db)
    .await
}

pub async fn create(
    db: &PgPool,
    account: &str,
    trade_type: &str,
    buy_quantity: f64,
) -> Result<Trade, sqlx::Error> {
    sqlx::query_as::<_, Trade>(
        r#"
        INSERT INTO trade (account, trade_type, buy_quantity)
        VALUES ($1, $2, $3)
        RETURNING id, account, trade_type, buy_quantity
        "#,
    )
    .bind(account)
    .bind(trade_type)
    .bind(buy_quantity)
    .fetch_one(db)
    .await
}

pub async fn update(
    db: &PgPool,
    id: i32,
    account: &str,
    trade_type: &str,
    buy_quantity: f64,
) -> Result<Option<()>, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE trade SET account = $2, trade_type = $3, buy_quantity = $4 WHERE id = $1",
    )
    .bind(id)
    .bind(account)
    .bind(trade_type)
    .bind(buy_quantity)
    .execute(db)
    .await?;
    Ok((result.rows_affected() > 0).then_some(()))
}

pub async fn delete(db: &PgPool, id: i32) -> Result<Option<()>, sqlx::Error> {
    let result = sqlx::query("DELETE FROM trade WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;
    Ok((result.rows_affected() > 0).then_some(()))
}
