//! Database layer with `SeaORM` entities and repositories.
//!
//! This crate provides:
//! - `SeaORM` entity definitions
//! - A generic repository and a unit of work for data access
//! - The report data source
//! - Database migrations and sample data

pub mod entities;
pub mod migration;
pub mod repositories;
pub mod seed;

pub use repositories::{GenericRepository, ReportRepository, UnitOfWork};

use retail_shared::DatabaseConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Establishes a pooled connection using the configured pool limits.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(
    database_url: &str,
    config: &DatabaseConfig,
) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url);
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .sqlx_logging(config.sqlx_logging);
    Database::connect(options).await
}
