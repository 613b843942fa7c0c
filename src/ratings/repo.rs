use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Rating {
    pub id: i32,
    pub moodys_rating: String,
    pub sandp_rating: String,
    pub fitch_rating: String,
    pub order_number: i32,
}

pub async fn find_all(db: &PgPool) -> Result<Vec<Rating>, sqlx::Error> {
    sqlx::query_as::<_, Rating>(
        r#"
        SELECT id, moodys_rating, sandp_rating, fitch_rating, order_number
        FROM rating
        ORDER BY order_number, id
        "#,
    )
    .fetch_all(db)
    .await
}

pub async fn find_by_id(db: &PgPool, id: i32) -> Result<Option<Rating>, sqlx::Error> {
    sqlx::query_as::<_, Rating>(
        r#"
        SELECT id, moodys_rating, sandp_rating, fitch_rating, order_number
        FROM rating
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await
}

pub async fn create(
    db: &PgPool,
    moodys_rating: &str,
    sandp_rating: &str,
    fitch_rating: &str,
    order_number: i32,
) -> Result<Rating, sqlx::Error> {
    sqlx::query_as::<_, Rating>(
        r#"
        INSERT INTO rating (moodys_rating, sandp_rating, fitch_rating, order_number)
        VALUES ($1, $2, $3, $4)
        RETURNING id, moodys_rating, sandp_rating, fitch_rating, order_number
        "#,
    )
    .bind(moodys_rating)
    .bind(sandp_rating)
    .bind(fitch_rating)
    .bind(order_number)
    .fetch_one(db)
    .await
}

pub async fn update(
    db: &PgPool,
    id: i32,
    moodys_rating: &str,
    sandp_rating: &str,
    fitch_rating: &str,
    order_number: i32,
) -> Result<Option<()>, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE rating
        SET moodys_rating = $2, sandp_rating = $3, fitch_rating = $4, order_number = $5
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(moodys_rating)
    .bind(sandp_rating)
    .bind(fitch_rating)
    .bind(order_number)
    .execute(db)
    .await?;
    Ok((result.rows_affected() > 0).then_some(()))
}

pub async fn delete(db: &PgPool, id: i32) -> Result<Option<()>, sqlx::Error> {
    let result = sqlx::query("DELETE FROM rating WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;
    Ok((result.rows_affected() > 0).then_some(()))
}
