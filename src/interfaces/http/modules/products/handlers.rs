//! Product REST API handlers

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::error;
use validator::Validate;

use super::dto::{PagedResponse, ProductListQuery, ProductResponse};
use crate::application::ProductService;

/// State for product routes
#[derive(Clone)]
pub struct ProductsState {
    pub service: Arc<ProductService>,
}

#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    params(ProductListQuery),
    responses(
        (status = 200, description = "Paged list of in-stock products", body = PagedResponse<ProductResponse>),
        (status = 400, description = "pageIndex or pageSize below 1", body = String)
    )
)]
pub async fn list_products(
    State(state): State<ProductsState>,
    Query(query): Query<ProductListQuery>,
) -> Result<Json<PagedResponse<ProductResponse>>, (StatusCode, &'static str)> {
    if query.validate().is_err() {
        return Err((
            StatusCode::BAD_REQUEST,
            "PageIndex and PageSize must be greater than 0.",
        ));
    }

    match state
        .service
        .list_products(query.page_index as u32, query.page_size as u32)
        .await
    {
        Ok(page) => Ok(Json(page.into())),
        Err(e) => {
            error!("Failed to list products: {}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"))
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────
