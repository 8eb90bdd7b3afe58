//! Database operations for portfolio items
//!
//! Single-row reads and writes only; consistency beyond that is not
//! required anywhere in the API.

use chrono::Utc;
use sqlx::{PgPool, Postgres, QueryBuilder, Row};
use uuid::Uuid;

use crate::portfolio::form::CreateItemInput;
use crate::portfolio::model::{Category, ImageRef, ItemStatus, PortfolioItem, DEFAULT_COLOR};

/// Listing filter, already validated by the handler layer
#[derive(Debug, Clone)]
pub struct PortfolioFilter {
    pub status: ItemStatus,
    pub category: Option<Category>,
    pub featured_only: bool,
}

const ITEM_COLUMNS: &str = "id, title, category, client, year, image_url, image_public_id, \
     tags, description, challenge, result_summary, color, featured, status, \
     created_at, updated_at";

fn item_from_row(row: &sqlx::postgres::PgRow) -> PortfolioItem {
    let image = match (
        row.get::<Option<String>, _>("image_url"),
        row.get::<Option<String>, _>("image_public_id"),
    ) {
        (Some(url), Some(public_id)) => Some(ImageRef { url, public_id }),
        _ => None,
    };

    PortfolioItem {
        id: row.get("id"),
        title: row.get("title"),
        category: Category::from_str(row.get::<String, _>("category").as_str())
            .unwrap_or(Category::StrategicPlanning),
        client: row.get("client"),
        year: row.get("year"),
        image,
        tags: row.get("tags"),
        description: row.get("description"),
        challenge: row.get("challenge"),
        result_summary: row.get("result_summary"),
        color: row.get("color"),
        featured: row.get("featured"),
        status: ItemStatus::from_str(row.get::<String, _>("status").as_str())
            .unwrap_or(ItemStatus::Published),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

fn push_filter(qb: &mut QueryBuilder<'_, Postgres>, filter: &PortfolioFilter) {
    qb.push(" WHERE status = ");
    qb.push_bind(filter.status.as_str());
    if let Some(category) = filter.category {
        qb.push(" AND category = ");
        qb.push_bind(category.as_str());
    }
    if filter.featured_only {
        qb.push(" AND featured = TRUE");
    }
}

/// Create a portfolio item from validated input
pub async fn create_item(
    pool: &PgPool,
    input: CreateItemInput,
    image: Option<ImageRef>,
) -> Result<PortfolioItem, sqlx::Error> {
    let item = PortfolioItem {
        id: Uuid::new_v4(),
        title: input.title,
        category: input.category,
        client: input.client,
        year: input.year,
        image,
        tags: input.tags,
        description: input.description,
        challenge: input.challenge,
        result_summary: input.result_summary,
        color: input.color.unwrap_or_else(|| DEFAULT_COLOR.to_string()),
        featured: input.featured,
        status: input.status,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    };

    sqlx::query(
        r#"
        INSERT INTO portfolio_items
            (id, title, category, client, year, image_url, image_public_id,
             tags, description, challenge, result_summary, color, featured, status,
             created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
        "#,
    )
    .bind(item.id)
    .bind(&item.title)
    .bind(item.category.as_str())
    .bind(&item.client)
    .bind(item.year)
    .bind(item.image.as_ref().map(|i| i.url.as_str()))
    .bind(item.image.as_ref().map(|i| i.public_id.as_str()))
    .bind(&item.tags)
    .bind(&item.description)
    .bind(item.challenge.as_deref())
    .bind(item.result_summary.as_deref())
    .bind(&item.color)
    .bind(item.featured)
    .bind(item.status.as_str())
    .bind(item.created_at)
    .bind(item.updated_at)
    .execute(pool)
    .await?;

    Ok(item)
}

/// Get a portfolio item by ID
pub async fn get_item_by_id(pool: &PgPool, id: Uuid) -> Result<Option<PortfolioItem>, sqlx::Error> {
    let row = sqlx::query(&format!(
        "SELECT {ITEM_COLUMNS} FROM portfolio_items WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(item_from_row))
}

/// Persist an already-merged item (full-row update)
pub async fn update_item(pool: &PgPool, item: &PortfolioItem) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE portfolio_items
        SET title = $1, category = $2, client = $3, year = $4,
            image_url = $5, image_public_id = $6, tags = $7, description = $8,
            challenge = $9, result_summary = $10, color = $11, featured = $12,
            status = $13, updated_at = $14
        WHERE id = $15
        "#,
    )
    .bind(&item.title)
    .bind(item.category.as_str())
    .bind(&item.client)
    .bind(item.year)
    .bind(item.image.as_ref().map(|i| i.url.as_str()))
    .bind(item.image.as_ref().map(|i| i.public_id.as_str()))
    .bind(&item.tags)
    .bind(&item.description)
    .bind(item.challenge.as_deref())
    .bind(item.result_summary.as_deref())
    .bind(&item.color)
    .bind(item.featured)
    .bind(item.status.as_str())
    .bind(item.updated_at)
    .bind(item.id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete a portfolio item, returning whether a row was removed
pub async fn delete_item(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM portfolio_items WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// List portfolio items, newest first
pub async fn list_items(
    pool: &PgPool,
    filter: &PortfolioFilter,
    limit: i64,
    offset: i64,
) -> Result<Vec<PortfolioItem>, sqlx::Error> {
    let mut qb = QueryBuilder::new(format!("SELECT {ITEM_COLUMNS} FROM portfolio_items"));
    push_filter(&mut qb, filter);
    qb.push(" ORDER BY created_at DESC LIMIT ");
    qb.push_bind(limit);
    qb.push(" OFFSET ");
    qb.push_bind(offset);

    let rows = qb.build().fetch_all(pool).await?;
    Ok(rows.iter().map(item_from_row).collect())
}

/// Count items matching a filter
pub async fn count_items(pool: &PgPool, filter: &PortfolioFilter) -> Result<i64, sqlx::Error> {
    let mut qb = QueryBuilder::new("SELECT COUNT(*) AS total FROM portfolio_items");
    push_filter(&mut qb, filter);

    let row = qb.build().fetch_one(pool).await?;
    Ok(row.get("total"))
}

/// Category values currently in use (not the fixed enumeration)
pub async fn distinct_categories(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
    let rows = sqlx::query("SELECT DISTINCT category FROM portfolio_items ORDER BY category")
        .fetch_all(pool)
        .await?;

    Ok(rows
        .iter()
        .map(|row| row.get::<String, _>("category"))
        .collect())
}
