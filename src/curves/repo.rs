use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CurvePoint {
    pub id: i32,
    pub term: f64,
    pub value: f64,
}

pub async fn find_all(db: &PgPool) -> Result<Vec<CurvePoint>, sqlx::Error> {
    sqlx::query_as::<_, CurvePoint>("SELECT id, term, value FROM curve_point ORDER BY id")
        .fetch_all(db)
        .await
}

pub async fn find_by_id(db: &PgPool, id: i32) -> Result<Option<CurvePoint>, sqlx::Error> {
    sqlx::query_as::<_, CurvePoint>("SELECT id, term, value FROM curve_point WHERE id = $1")
        .bind(id)
        .fetch_optional(db)
        .await
}

pub async fn create(db: &PgPool, term: f64, value: f64) -> Result<CurvePoint, sqlx::Error> {
    sqlx::query_as::<_, CurvePoint>(
        "INSERT INTO curve_point (term, value) VALUES ($1, $2) RETURNING id, term, value",
    )
    .bind(term)
    .bind(value)
    .fetch_one(db)
    .await
}

pub async fn update(
    db: &PgPool,
    id: i32,
    term: f64,
    value: f64,
) -> Result<Option<()>, sqlx::Error> {
    let result = sqlx::query("UPDATE curve_point SET term = $2, value = $3 WHERE id = $1")
        .bind(id)
        .bind(term)
        .bind(value)
        .execute(db)
        .await?;
    Ok((result.rows_affected() > 0).then_some(()))
}

pub async fn delete(db: &PgPool, id: i32) -> Result<Option<()>, sqlx::Error> {
    let result = sqlx::query("DELETE FROM curve_point WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;
    Ok((result.rows_affected() > 0).then_some(()))
}
