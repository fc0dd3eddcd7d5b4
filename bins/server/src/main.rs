//! Retail reports API server
//!
//! Main entry point for the retail reports service.

use anyhow::Context;
use sea_orm_migration::MigratorTrait;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use retail_api::{AppState, create_router};
use retail_db::{connect, migration::Migrator, seed::seed_if_empty};
use retail_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "retail=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    let database_url = config.database.connection_url()?;
    let db = connect(&database_url, &config.database).await?;
    info!("Connected to database");

    if config.server.run_migrations {
        Migrator::up(&db, None)
            .await
            .context("Failed to apply migrations")?;
        info!("Migrations applied");
    }

    if config.server.seed_on_empty {
        match seed_if_empty(&db).await {
            Ok(true) => info!("Seeded sample data"),
            Ok(false) => info!("Database already has data, skipping seed"),
            Err(e) => warn!(error = %e, "Failed to seed sample data"),
        }
    }

    let app = create_router(AppState::new(db));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
