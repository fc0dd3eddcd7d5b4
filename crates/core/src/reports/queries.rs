//! Report queries bound to a data source.

use std::fmt::Display;

use chrono::NaiveDateTime;
use retail_shared::types::{ClientId, OrderId, ProductId};
use rust_decimal::Decimal;

use super::error::ReportError;
use super::service::ReportService;
use super::source::DataSource;
use super::types::{
    ClientOrderCount, OrderQuantityTotal, OrderWithDetails, ProductQuantity, PurchasedProduct,
};
use crate::catalog::{Client, Order, Product};

/// Runs the reports against collections loaded from `S`.
///
/// Each method loads only the collections its report reads, in a fixed
/// order, then hands them to [`ReportService`].
#[derive(Debug, Clone)]
pub struct ReportQueries<S> {
    source: S,
}

fn source_error(e: impl Display) -> ReportError {
    ReportError::Source(e.to_string())
}

impl<S: DataSource> ReportQueries<S> {
    /// Creates a query runner over the given source.
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Returns the underlying source.
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// See [`ReportService::clients_by_name`].
    pub async fn clients_by_name(&self, name: &str) -> Result<Vec<Client>, ReportError> {
        let clients = self.source.clients().await.map_err(source_error)?;
        Ok(ReportService::clients_by_name(&clients, name))
    }

    /// See [`ReportService::products_above_price`].
    pub async fn products_above_price(&self, price: Decimal) -> Result<Vec<Product>, ReportError> {
        let products = self.source.products().await.map_err(source_error)?;
        Ok(ReportService::products_above_price(&products, price))
    }

    /// See [`ReportService::products_in_order`].
    pub async fn products_in_order(
        &self,
        order_id: OrderId,
    ) -> Result<Vec<ProductQuantity>, ReportError> {
        let details = self.source.order_details().await.map_err(source_error)?;
        let products = self.source.products().await.map_err(source_error)?;
        Ok(ReportService::products_in_order(&details, &products, order_id))
    }

    /// See [`ReportService::total_products_in_order`].
    pub async fn total_products_in_order(
        &self,
        order_id: OrderId,
    ) -> Result<OrderQuantityTotal, ReportError> {
        let details = self.source.order_details().await.map_err(source_error)?;
        Ok(ReportService::total_products_in_order(&details, order_id))
    }

    /// See [`ReportService::most_expensive_product`].
    pub async fn most_expensive_product(&self) -> Result<Option<Product>, ReportError> {
        let products = self.source.products().await.map_err(source_error)?;
        Ok(ReportService::most_expensive_product(&products))
    }

    /// See [`ReportService::orders_after_date`].
    pub async fn orders_after_date(&self, date: NaiveDateTime) -> Result<Vec<Order>, ReportError> {
        let orders = self.source.orders().await.map_err(source_error)?;
        Ok(ReportService::orders_after_date(&orders, date))
    }

    /// See [`ReportService::average_price`].
    pub async fn average_price(&self) -> Result<Decimal, ReportError> {
        let products = self.source.products().await.map_err(source_error)?;
        ReportService::average_price(&products)
    }

    /// See [`ReportService::products_without_description`].
    pub async fn products_without_description(&self) -> Result<Vec<Product>, ReportError> {
        let products = self.source.products().await.map_err(source_error)?;
        Ok(ReportService::products_without_description(&products))
    }

    /// See [`ReportService::client_with_most_orders`].
    pub async fn client_with_most_orders(&self) -> Result<Option<ClientOrderCount>, ReportError> {
        let clients = self.source.clients().await.map_err(source_error)?;
        let orders = self.source.orders().await.map_err(source_error)?;
        Ok(ReportService::client_with_most_orders(&clients, &orders))
    }

    /// See [`ReportService::orders_with_details`].
    pub async fn orders_with_details(&self) -> Result<Vec<OrderWithDetails>, ReportError> {
        let orders = self.source.orders().await.map_err(source_error)?;
        let details = self.source.order_details().await.map_err(source_error)?;
        let products = self.source.products().await.map_err(source_error)?;
        let clients = self.source.clients().await.map_err(source_error)?;
        Ok(ReportService::orders_with_details(
            &orders, &details, &products, &clients,
        ))
    }

    /// See [`ReportService::products_purchased_by_client`].
    pub async fn products_purchased_by_client(
        &self,
        client_id: ClientId,
    ) -> Result<Vec<PurchasedProduct>, ReportError> {
        let orders = self.source.orders().await.map_err(source_error)?;
        let details = self.source.order_details().await.map_err(source_error)?;
        let products = self.source.products().await.map_err(source_error)?;
        Ok(ReportService::products_purchased_by_client(
            &orders, &details, &products, client_id,
        ))
    }

    /// See [`ReportService::clients_who_purchased_product`].
    pub async fn clients_who_purchased_product(
        &self,
        product_id: ProductId,
    ) -> Result<Vec<Client>, ReportError> {
        let details = self.source.order_details().await.map_err(source_error)?;
        let orders = self.source.orders().await.map_err(source_error)?;
        let clients = self.source.clients().await.map_err(source_error)?;
        Ok(ReportService::clients_who_purchased_product(
            &details, &orders, &clients, product_id,
        ))
    }
}
