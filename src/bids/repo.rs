use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BidList {
    pub id: i32,
    pub account: String,
    pub bid_type: String,
    pub bid_quantity: f64,
}

pub async fn find_all(db: &PgPool) -> Result<Vec<BidList>, sqlx::Error> {
    sqlx::query_as::<_, BidList>(
        "SELECT id, account, bid_type, bid_quantity FROM bid_list ORDER BY id",
    )
    .fetch_all(db)
    .await
}

pub async fn find_by_id(db: &PgPool, id: i32) -> Result<Option<BidList>, sqlx::Error> {
    sqlx::query_as::<_, BidList>(
        "SELECT id, account, bid_type, bid_quantity FROM bid_list WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(db)
    .await
}

pub async fn create(
    db: &PgPool,
    account: &str,
    bid_type: &str,
    bid_quantity: f64,
) -> Result<BidList, sqlx::Error> {
    sqlx::query_as::<_, BidList>(
        r#"
        INSERT INTO bid_list (account, bid_type, bid_quantity)
        VALUES ($1, $2, $3)
        RETURNING id, account, bid_type, bid_quantity
        "#,
    )
    .bind(account)
    .bind(bid_type)
    .bind(bid_quantity)
    .fetch_one(db)
    .await
}

pub async fn update(
    db: &PgPool,
    id: i32,
    account: &str,
    bid_type: &str,
    bid_quantity: f64,
) -> Result<Option<()>, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE bid_list SET account = $2, bid_type = $3, bid_quantity = $4 WHERE id = $1",
    )
    .bind(id)
    .bind(account)
    .bind(bid_type)
    .bind(bid_quantity)
    .execute(db)
    .await?;
    Ok((result.rows_affected() > 0).then_some(()))
}

pub async fn delete(db: &PgPool, id: i32) -> Result<Option<()>, sqlx::Error> {
    let result = sqlx::query("DELETE FROM bid_list WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;
    Ok((result.rows_affected() > 0).then_some(()))
}
