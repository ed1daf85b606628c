//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::FromRef, routing::get, Router};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::modules::health::{self, HealthState};
use super::modules::products::{self, ProductsState};
use crate::application::ProductService;

/// Unified state for all catalog routes. Axum extracts the specific
/// handler state via `FromRef`.
#[derive(Clone)]
pub struct CatalogApiState {
    pub service: Arc<ProductService>,
    pub db: DatabaseConnection,
    pub started_at: Arc<Instant>,
}

// -- FromRef implementations so each handler keeps its own State<T> extractor --

impl FromRef<CatalogApiState> for ProductsState {
    fn from_ref(s: &CatalogApiState) -> Self {
        ProductsState {
            service: Arc::clone(&s.service),
        }
    }
}

impl FromRef<CatalogApiState> for HealthState {
    fn from_ref(s: &CatalogApiState) -> Self {
        HealthState {
            db: s.db.clone(),
            started_at: Arc::clone(&s.started_at),
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::handlers::health_check,
        // Products
        products::handlers::list_products,
    ),
    tags(
        (name = "Products", description = "Product catalog listing"),
        (name = "Health", description = "Service health")
    ),
    info(
        title = "Online Store API",
        version = "1.0.0",
        description = "Read-only product catalog with paging and category discounts"
    )
)]
struct ApiDoc;

/// Create the REST API router
pub fn create_api_router(service: Arc<ProductService>, db: DatabaseConnection) -> Router {
    let state = CatalogApiState {
        service,
        db,
        started_at: Arc::new(Instant::now()),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/products", get(products::handlers::list_products))
        .route("/health", get(health::handlers::health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ── Tests ──────────────────────────────────────────────────────
