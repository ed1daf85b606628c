//! Online Store catalog service.
//!
//! REST API that lists in-stock products with pagination and applies
//! category discounts on the fly. Reads configuration from a TOML file
//! (~/.config/catalog-service/config.toml).

use std::sync::Arc;

use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use store_catalog::application::{CategoryDiscount, DiscountBadge, ProductService};
use store_catalog::infrastructure::database::migrator::Migrator;
use store_catalog::infrastructure::database::seed;
use store_catalog::{
    create_api_router, default_config_path, init_database, init_tracing, AppConfig,
    DatabaseConfig, SeaOrmProductRepository,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("CATALOG_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let config = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            init_tracing(&cfg);
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting Online Store catalog service...");

    // ── Database ───────────────────────────────────────────────
    let db_config = DatabaseConfig {
        url: config.database.url.clone(),
    };
    let db = match init_database(&db_config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    info!("Running database migrations...");
    if let Err(e) = Migrator::up(&db, None).await {
        error!("Failed to run migrations: {}", e);
        return Err(e.into());
    }
    info!("Migrations completed");

    // Insert the starter catalog on first start
    seed::seed_catalog(&db).await?;

    // ── Services ───────────────────────────────────────────────
    let repo = Arc::new(SeaOrmProductRepository::new(db.clone()));
    let service = Arc::new(ProductService::new(
        repo,
        Arc::new(CategoryDiscount),
        Arc::new(DiscountBadge),
    ));

    let router = create_api_router(service, db.clone());

    // ── Serve ──────────────────────────────────────────────────
    let addr = config.server.address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("REST API server listening on http://{}", addr);
    info!("Swagger UI available at http://{}/docs/", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received");
        })
        .await?;

    if let Err(e) = db.close().await {
        warn!("Error closing database connection: {}", e);
    }
    info!("Catalog service shutdown complete");
    Ok(())
}
