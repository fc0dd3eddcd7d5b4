//! Report data access.
//!
//! Loads whole tables and hands them to the report engine as catalog entities.

use std::sync::Arc;

use retail_core::{Client, DataSource, Order, OrderDetail, Product};
use sea_orm::{DatabaseConnection, DbErr};
use tracing::debug;

use super::generic::GenericRepository;
use crate::entities::{clients, order_details, orders, products};

/// Read-only source of the four catalog collections.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    db: Arc<DatabaseConnection>,
}

impl ReportRepository {
    /// Creates a new report repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl DataSource for ReportRepository {
    type Error = DbErr;

    async fn clients(&self) -> Result<Vec<Client>, DbErr> {
        let rows = GenericRepository::<clients::Entity, _>::new(&*self.db)
            .get_all()
            .await?;
        debug!(count = rows.len(), "Loaded clients");
        Ok(rows.into_iter().map(Client::from).collect())
    }

    async fn products(&self) -> Result<Vec<Product>, DbErr> {
        let rows = GenericRepository::<products::Entity, _>::new(&*self.db)
            .get_all()
            .await?;
        debug!(count = rows.len(), "Loaded products");
        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn orders(&self) -> Result<Vec<Order>, DbErr> {
        let rows = GenericRepository::<orders::Entity, _>::new(&*self.db)
            .get_all()
            .await?;
        debug!(count = rows.len(), "Loaded orders");
        Ok(rows.into_iter().map(Order::from).collect())
    }

    async fn order_details(&self) -> Result<Vec<OrderDetail>, DbErr> {
        let rows = GenericRepository::<order_details::Entity, _>::new(&*self.db)
            .get_all()
            .await?;
        debug!(count = rows.len(), "Loaded order details");
        Ok(rows.into_iter().map(OrderDetail::from).collect())
    }
}
