//! Data-source seam for the report engine.
//!
//! The engine needs exactly one capability from storage: the full collection
//! of each entity kind. Filtering always happens in memory.

use std::convert::Infallible;
use std::fmt::Display;
use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::catalog::{Client, Order, OrderDetail, Product};

/// Supplies whole entity collections, one typed accessor per kind.
pub trait DataSource: Send + Sync {
    /// Error raised when a collection cannot be loaded.
    type Error: Display + Send;

    /// Loads every client.
    fn clients(&self) -> impl Future<Output = Result<Vec<Client>, Self::Error>> + Send;

    /// Loads every product.
    fn products(&self) -> impl Future<Output = Result<Vec<Product>, Self::Error>> + Send;

    /// Loads every order.
    fn orders(&self) -> impl Future<Output = Result<Vec<Order>, Self::Error>> + Send;

    /// Loads every order detail.
    fn order_details(&self) -> impl Future<Output = Result<Vec<OrderDetail>, Self::Error>> + Send;
}

/// An in-memory snapshot of the four collections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// Clients.
    pub clients: Vec<Client>,
    /// Products.
    pub products: Vec<Product>,
    /// Orders.
    pub orders: Vec<Order>,
    /// Order details.
    pub order_details: Vec<OrderDetail>,
}

impl DataSource for Dataset {
    type Error = Infallible;

    async fn clients(&self) -> Result<Vec<Client>, Infallible> {
        Ok(self.clients.clone())
    }

    async fn products(&self) -> Result<Vec<Product>, Infallible> {
        Ok(self.products.clone())
    }

    async fn orders(&self) -> Result<Vec<Order>, Infallible> {
        Ok(self.orders.clone())
    }

    async fn order_details(&self) -> Result<Vec<OrderDetail>, Infallible> {
        Ok(self.order_details.clone())
    }
}
