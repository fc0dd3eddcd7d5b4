//! Loads the sample clients, products, orders and order details.
//!
//! Does nothing when any client already exists.
//!
//! Usage: cargo run --bin seeder

use anyhow::Context;
use tracing::info;

use retail_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "retail=info".into()),
        )
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;
    let database_url = config.database.connection_url()?;

    info!("Connecting to database...");
    let db = retail_db::connect(&database_url, &config.database).await?;

    if retail_db::seed::seed_if_empty(&db).await? {
        info!("Seeding complete");
    } else {
        info!("Database already has data, skipping seed");
    }

    Ok(())
}
