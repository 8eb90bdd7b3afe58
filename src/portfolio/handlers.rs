/**
 * Portfolio Handlers
 *
 * HTTP handlers for the portfolio endpoints.
 *
 * # Routes
 *
 * - `GET /api/portfolio` - public, filterable listing with pagination
 * - `GET /api/portfolio/categories` - public, categories in use
 * - `GET /api/portfolio/{id}` - public, single item
 * - `POST /api/portfolio` - guarded, multipart create with optional image
 * - `PUT /api/portfolio/{id}` - guarded, multipart partial update
 * - `DELETE /api/portfolio/{id}` - guarded, cascades to the image asset
 *
 * # Image Lifecycle
 *
 * Replacing or deleting an item's image deletes the previous asset from
 * the store first. That delete is best-effort: a failure is logged and
 * the record operation proceeds, so an orphaned file on disk is possible
 * and accepted.
 */

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;
use crate::portfolio::db::{
    count_items, create_item, delete_item, distinct_categories, get_item_by_id, list_items,
    update_item, PortfolioFilter,
};
use crate::portfolio::form::{apply_update, PortfolioForm, UploadedImage};
use crate::portfolio::model::{Category, ImageRef, ItemStatus, PortfolioItem};
use crate::server::state::AppState;

const DEFAULT_PAGE_SIZE: i64 = 100;
const MAX_PAGE_SIZE: i64 = 500;

/// Query parameters for the listing endpoint
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
    pub status: Option<String>,
    pub featured: Option<bool>,
    pub limit: Option<i64>,
    pub page: Option<i64>,
}

/// Paginated listing response
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub success: bool,
    /// Items on this page
    pub count: usize,
    /// Items matching the filter overall
    pub total: i64,
    pub page: i64,
    pub pages: i64,
    pub data: Vec<PortfolioItem>,
}

/// Single-item response
#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub success: bool,
    pub data: PortfolioItem,
}

/// Create/update response
#[derive(Debug, Serialize)]
pub struct MutationResponse {
    pub success: bool,
    pub message: String,
    pub data: PortfolioItem,
}

/// Delete response
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}

/// Categories-in-use response
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub data: Vec<String>,
}

fn parse_item_id(raw: &str) -> Result<Uuid, ApiError> {
    // A malformed id is indistinguishable from an unknown one to callers
    Uuid::parse_str(raw).map_err(|_| ApiError::not_found("Portfolio item not found"))
}

impl ListQuery {
    fn into_filter(self) -> Result<(PortfolioFilter, i64, i64), ApiError> {
        let status = match self.status.as_deref() {
            // Note: the public endpoint accepts an explicit status override
            // (including draft) without authorization, mirroring the admin
            // panel's usage. See DESIGN.md.
            Some(raw) => ItemStatus::from_str(raw)
                .ok_or_else(|| ApiError::validation(format!("Invalid status: {raw}")))?,
            None => ItemStatus::Published,
        };

        let category = match self.category.as_deref() {
            None | Some("all") => None,
            Some(raw) => Some(
                Category::from_str(raw)
                    .ok_or_else(|| ApiError::validation(format!("Invalid category: {raw}")))?,
            ),
        };

        let filter = PortfolioFilter {
            status,
            category,
            featured_only: self.featured == Some(true),
        };

        let limit = self.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
        let page = self.page.unwrap_or(1).max(1);

        Ok((filter, limit, page))
    }
}

/// OFFSET for a 1-based page; saturates instead of overflowing on
/// absurd page numbers, which just yields an empty page.
fn page_offset(page: i64, limit: i64) -> i64 {
    (page - 1).saturating_mul(limit)
}

/// Total page count, rounded up. `limit` is capped well below
/// `i64::MAX` so the addition cannot overflow.
fn page_count(total: i64, limit: i64) -> i64 {
    (total + limit - 1) / limit
}

/// GET /api/portfolio
pub async fn list_portfolio(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ListResponse>, ApiError> {
    let (filter, limit, page) = query.into_filter()?;
    let offset = page_offset(page, limit);

    let items = list_items(&state.pool, &filter, limit, offset).await?;
    let total = count_items(&state.pool, &filter).await?;
    let pages = page_count(total, limit);

    Ok(Json(ListResponse {
        success: true,
        count: items.len(),
        total,
        page,
        pages,
        data: items,
    }))
}

/// GET /api/portfolio/categories
pub async fn get_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = distinct_categories(&state.pool).await?;
    Ok(Json(CategoriesResponse {
        success: true,
        data: categories,
    }))
}

/// GET /api/portfolio/{id}
pub async fn get_portfolio_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ItemResponse>, ApiError> {
    let id = parse_item_id(&id)?;
    let item = get_item_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Portfolio item not found"))?;

    Ok(Json(ItemResponse {
        success: true,
        data: item,
    }))
}

async fn store_image(
    state: &AppState,
    image: UploadedImage,
) -> Result<ImageRef, ApiError> {
    let asset = state.assets.store(&image.file_name, &image.bytes).await?;
    Ok(ImageRef {
        url: asset.url,
        public_id: asset.public_id,
    })
}

/// Best-effort deletion of a replaced or orphaned asset
async fn discard_image(state: &AppState, image: &ImageRef) {
    if let Err(e) = state.assets.remove(&image.public_id).await {
        tracing::warn!("Failed to delete asset {}: {}", image.public_id, e);
    }
}

/// POST /api/portfolio
pub async fn create_portfolio(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<MutationResponse>), ApiError> {
    let form = PortfolioForm::from_multipart(multipart).await?;
    let (input, uploaded) = form.into_create_input()?;

    let image = match uploaded {
        Some(upload) => Some(store_image(&state, upload).await?),
        None => None,
    };

    let item = create_item(&state.pool, input, image).await?;
    tracing::info!("Portfolio item created: {} ({})", item.title, item.id);

    Ok((
        StatusCode::CREATED,
        Json(MutationResponse {
            success: true,
            message: "Portfolio item created successfully".to_string(),
            data: item,
        }),
    ))
}

/// PUT /api/portfolio/{id}
pub async fn update_portfolio(
    State(state): State<AppState>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<Json<MutationResponse>, ApiError> {
    let id = parse_item_id(&id)?;
    let mut item = get_item_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Portfolio item not found"))?;

    let form = PortfolioForm::from_multipart(multipart).await?;
    let (input, uploaded) = form.into_update_input()?;

    if let Some(upload) = uploaded {
        // Replace the asset before the record update; the old file is gone
        // best-effort even if the update below fails.
        if let Some(old_image) = item.image.take() {
            discard_image(&state, &old_image).await;
        }
        item.image = Some(store_image(&state, upload).await?);
    }

    apply_update(&mut item, input);
    update_item(&state.pool, &item).await?;

    tracing::info!("Portfolio item updated: {} ({})", item.title, item.id);

    Ok(Json(MutationResponse {
        success: true,
        message: "Portfolio item updated successfully".to_string(),
        data: item,
    }))
}

/// DELETE /api/portfolio/{id}
pub async fn delete_portfolio(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let id = parse_item_id(&id)?;
    let item = get_item_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Portfolio item not found"))?;

    // Asset first, then the record; partial failure is not rolled back.
    if let Some(image) = &item.image {
        discard_image(&state, image).await;
    }

    delete_item(&state.pool, id).await?;
    tracing::info!("Portfolio item deleted: {}", id);

    Ok(Json(DeleteResponse {
        success: true,
        message: "Portfolio item deleted successfully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn query(
        category: Option<&str>,
        status: Option<&str>,
        featured: Option<bool>,
        limit: Option<i64>,
        page: Option<i64>,
    ) -> ListQuery {
        ListQuery {
            category: category.map(str::to_string),
            status: status.map(str::to_string),
            featured,
            limit,
            page,
        }
    }

    #[test]
    fn test_filter_defaults() {
        let (filter, limit, page) = query(None, None, None, None, None).into_filter().unwrap();
        assert_eq!(filter.status, ItemStatus::Published);
        assert!(filter.category.is_none());
        assert!(!filter.featured_only);
        assert_eq!(limit, DEFAULT_PAGE_SIZE);
        assert_eq!(page, 1);
    }

    #[test]
    fn test_all_sentinel_means_no_category_filter() {
        let (with_all, _, _) = query(Some("all"), None, None, None, None)
            .into_filter()
            .unwrap();
        let (without, _, _) = query(None, None, None, None, None).into_filter().unwrap();
        assert_eq!(with_all.category, without.category);
    }

    #[test]
    fn test_category_and_draft_status_filter() {
        let (filter, _, _) = query(
            Some("Design and Graphics"),
            Some("draft"),
            None,
            None,
            None,
        )
        .into_filter()
        .unwrap();
        assert_eq!(filter.category, Some(Category::DesignAndGraphics));
        assert_eq!(filter.status, ItemStatus::Draft);
    }

    #[test]
    fn test_invalid_filter_values_rejected() {
        assert!(query(Some("Carpentry"), None, None, None, None)
            .into_filter()
            .is_err());
        assert!(query(None, Some("archived"), None, None, None)
            .into_filter()
            .is_err());
    }

    #[test]
    fn test_featured_false_is_not_a_filter() {
        let (filter, _, _) = query(None, None, Some(false), None, None)
            .into_filter()
            .unwrap();
        assert!(!filter.featured_only);

        let (filter, _, _) = query(None, None, Some(true), None, None)
            .into_filter()
            .unwrap();
        assert!(filter.featured_only);
    }

    #[test]
    fn test_pagination_clamps_to_sane_values() {
        let (_, limit, page) = query(None, None, None, Some(0), Some(-3))
            .into_filter()
            .unwrap();
        assert_eq!(limit, 1);
        assert_eq!(page, 1);

        let (_, limit, page) = query(None, None, None, Some(10), Some(4))
            .into_filter()
            .unwrap();
        assert_eq!(limit, 10);
        assert_eq!(page, 4);

        let (_, limit, _) = query(None, None, None, Some(i64::MAX), None)
            .into_filter()
            .unwrap();
        assert_eq!(limit, MAX_PAGE_SIZE);
    }

    #[test]
    fn test_page_count_rounds_up() {
        assert_eq!(page_count(0, 100), 0);
        assert_eq!(page_count(1, 100), 1);
        assert_eq!(page_count(100, 100), 1);
        assert_eq!(page_count(101, 100), 2);
    }

    #[test]
    fn test_huge_page_number_does_not_overflow_offset() {
        assert_eq!(page_offset(1, 100), 0);
        assert_eq!(page_offset(4, 10), 30);
        assert_eq!(page_offset(i64::MAX, MAX_PAGE_SIZE), i64::MAX);
        assert!(page_offset(i64::MAX, DEFAULT_PAGE_SIZE) > 0);
    }

    #[test]
    fn test_malformed_id_maps_to_not_found() {
        let err = parse_item_id("not-a-uuid").unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Portfolio item not found");
    }
}
