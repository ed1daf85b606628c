//! Product DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{Category, PagedResult, Product};

/// Query parameters for the product listing
///
/// Signed so that negative values reach the handler's validation
/// response instead of failing extraction.
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ProductListQuery {
    /// Page number (1-based). Default: 1
    #[serde(default = "default_page_index")]
    #[validate(range(min = 1))]
    pub page_index: i32,
    /// Items per page. Default: 10
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1))]
    pub page_size: i32,
}

fn default_page_index() -> i32 {
    1
}

fn default_page_size() -> i32 {
    10
}

/// Category view nested in a product
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: i32,
    pub name: String,
    #[schema(value_type = f64)]
    pub discount: Decimal,
}

impl From<Category> for CategoryResponse {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            discount: c.discount,
        }
    }
}

/// Product view returned by the listing endpoint
///
/// Price and description reflect any discount applied while serving
/// this request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub stock: i32,
    pub category_id: i32,
    pub description: Option<String>,
    pub category: CategoryResponse,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            price: p.price,
            stock: p.stock,
            category_id: p.category_id,
            description: p.description,
            category: p.category.into(),
        }
    }
}

/// Paginated response envelope
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PagedResponse<T> {
    /// Items on the current page
    pub items: Vec<T>,
    /// Total matching count across all pages
    pub total_count: u64,
    /// Current page (1-based)
    pub page_index: u32,
    /// Page size
    pub page_size: u32,
}

impl From<PagedResult<Product>> for PagedResponse<ProductResponse> {
    fn from(page: PagedResult<Product>) -> Self {
        Self {
            items: page.items.into_iter().map(Into::into).collect(),
            total_count: page.total_count,
            page_index: page.page_index,
            page_size: page.page_size,
        }
    }
}
