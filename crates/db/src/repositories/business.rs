use crate::models::DbBusiness;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_business(
    pool: &Pool<Postgres>,
    name: &str,
    timezone: &str,
    hours: Option<serde_json::Value>,
) -> Result<DbBusiness> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating business: id={}, name={}, timezone={}, has_hours={}",
        id, name, timezone, hours.is_some()
    );

    let business = sqlx::query_as::<_, DbBusiness>(
        r#"
        INSERT INTO businesses (id, name, timezone, hours, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, name, timezone, hours, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(timezone)
    .bind(hours)
    .bind(now)
    .fetch_one(pool)
    .await?;

    tracing::debug!("Business created successfully: id={}", id);
    Ok(business)
}

pub async fn get_business_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbBusiness>> {
    tracing::debug!("Getting business by id: {}", id);

    let business = sqlx::query_as::<_, DbBusiness>(
        r#"
        SELECT id, name, timezone, hours, created_at
        FROM businesses
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    if business.is_none() {
        tracing::debug!("Business not found: id={}", id);
    }

    Ok(business)
}

/// Replaces the stored hours record. Returns `None` when no business has `id`.
pub async fn update_business_hours(
    pool: &Pool<Postgres>,
    id: Uuid,
    hours: serde_json::Value,
) -> Result<Option<DbBusiness>> {
    let business = sqlx::query_as::<_, DbBusiness>(
        r#"
        UPDATE businesses
        SET hours = $2
        WHERE id = $1
        RETURNING id, name, timezone, hours, created_at
        "#,
    )
    .bind(id)
    .bind(hours)
    .fetch_optional(pool)
    .await?;

    Ok(business)
}
