//! # Online Store Catalog API
//!
//! Read-only product catalog service: lists in-stock products with
//! pagination, applying category-based discounts on the fly.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, paging envelope and repository traits
//! - **application**: Product listing orchestration, discount strategy and decorator
//! - **infrastructure**: SeaORM entities, migrations, repositories and seed data
//! - **interfaces**: REST API with Swagger documentation

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub use config::{default_config_path, init_tracing, AppConfig};

// Re-export database types for easy access
pub use infrastructure::database::{init_database, DatabaseConfig};
pub use infrastructure::database::repositories::SeaOrmProductRepository;

// Re-export API router
pub use interfaces::http::create_api_router;
