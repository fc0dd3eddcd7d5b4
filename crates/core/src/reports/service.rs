//! Report generation service.
//!
//! Every function here is a pure transformation of borrowed collections.
//! Inputs are never mutated and results are freshly allocated, so the same
//! snapshot can be shared across concurrent callers.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDateTime;
use retail_shared::types::{ClientId, OrderId, ProductId};
use rust_decimal::Decimal;

use super::error::ReportError;
use super::lookup::{group_by, index_by};
use super::types::{
    ClientOrderCount, OrderLine, OrderQuantityTotal, OrderWithDetails, ProductQuantity,
    PurchasedProduct,
};
use crate::catalog::{Client, Order, OrderDetail, Product};

/// Service for generating the retail reports.
pub struct ReportService;

impl ReportService {
    /// Clients whose name contains `name` (case-sensitive).
    #[must_use]
    pub fn clients_by_name(clients: &[Client], name: &str) -> Vec<Client> {
        clients
            .iter()
            .filter(|c| c.name.contains(name))
            .cloned()
            .collect()
    }

    /// Products priced strictly above `price`.
    #[must_use]
    pub fn products_above_price(products: &[Product], price: Decimal) -> Vec<Product> {
        products
            .iter()
            .filter(|p| p.price > price)
            .cloned()
            .collect()
    }

    /// Product name and quantity for each line of an order.
    ///
    /// Inner join: lines whose product is unknown are dropped.
    #[must_use]
    pub fn products_in_order(
        details: &[OrderDetail],
        products: &[Product],
        order_id: OrderId,
    ) -> Vec<ProductQuantity> {
        let products_by_id = index_by(products, |p| p.id);

        details
            .iter()
            .filter(|d| d.order_id == order_id)
            .filter_map(|d| {
                products_by_id.get(&d.product_id).map(|p| ProductQuantity {
                    product_name: p.name.clone(),
                    quantity: d.quantity,
                })
            })
            .collect()
    }

    /// Total units ordered across the lines of an order.
    #[must_use]
    pub fn total_products_in_order(details: &[OrderDetail], order_id: OrderId) -> OrderQuantityTotal {
        let total_quantity = details
            .iter()
            .filter(|d| d.order_id == order_id)
            .map(|d| i64::from(d.quantity))
            .sum();

        OrderQuantityTotal {
            order_id,
            total_quantity,
        }
    }

    /// The highest-priced product; the first one wins on ties.
    #[must_use]
    pub fn most_expensive_product(products: &[Product]) -> Option<Product> {
        products
            .iter()
            .fold(None::<&Product>, |best, p| match best {
                Some(b) if b.price >= p.price => Some(b),
                _ => Some(p),
            })
            .cloned()
    }

    /// Orders placed strictly after `date`.
    #[must_use]
    pub fn orders_after_date(orders: &[Order], date: NaiveDateTime) -> Vec<Order> {
        orders
            .iter()
            .filter(|o| o.order_date > date)
            .cloned()
            .collect()
    }

    /// Arithmetic mean of all product prices.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::EmptyInput` when there are no products.
    pub fn average_price(products: &[Product]) -> Result<Decimal, ReportError> {
        if products.is_empty() {
            return Err(ReportError::EmptyInput("average price"));
        }

        let total: Decimal = products.iter().map(|p| p.price).sum();
        Ok(total / Decimal::from(products.len()))
    }

    /// Products whose description is missing or empty.
    #[must_use]
    pub fn products_without_description(products: &[Product]) -> Vec<Product> {
        products
            .iter()
            .filter(|p| p.lacks_description())
            .cloned()
            .collect()
    }

    /// The client with the most orders; the first one wins on ties.
    ///
    /// Clients without orders still compete with a count of zero, so the
    /// result is only `None` when there are no clients at all.
    #[must_use]
    pub fn client_with_most_orders(clients: &[Client], orders: &[Order]) -> Option<ClientOrderCount> {
        let mut counts: HashMap<ClientId, usize> = HashMap::new();
        for order in orders {
            *counts.entry(order.client_id).or_default() += 1;
        }

        let mut best: Option<(&Client, usize)> = None;
        for client in clients {
            let count = counts.get(&client.id).copied().unwrap_or(0);
            if best.is_none_or(|(_, max)| count > max) {
                best = Some((client, count));
            }
        }

        best.map(|(client, order_count)| ClientOrderCount {
            client: client.clone(),
            order_count,
        })
    }

    /// Every order with its client name and resolved lines.
    #[must_use]
    pub fn orders_with_details(
        orders: &[Order],
        details: &[OrderDetail],
        products: &[Product],
        clients: &[Client],
    ) -> Vec<OrderWithDetails> {
        let clients_by_id = index_by(clients, |c| c.id);
        let products_by_id = index_by(products, |p| p.id);
        let details_by_order = group_by(details, |d| d.order_id);

        orders
            .iter()
            .map(|o| OrderWithDetails {
                order_id: o.id,
                order_date: o.order_date,
                client_name: clients_by_id.get(&o.client_id).map(|c| c.name.clone()),
                details: details_by_order
                    .get(&o.id)
                    .map(|lines| {
                        lines
                            .iter()
                            .map(|d| OrderLine {
                                product_name: products_by_id
                                    .get(&d.product_id)
                                    .map(|p| p.name.clone()),
                                quantity: d.quantity,
                            })
                            .collect()
                    })
                    .unwrap_or_default(),
            })
            .collect()
    }

    /// Every product line across a client's orders, order by order.
    #[must_use]
    pub fn products_purchased_by_client(
        orders: &[Order],
        details: &[OrderDetail],
        products: &[Product],
        client_id: ClientId,
    ) -> Vec<PurchasedProduct> {
        let products_by_id = index_by(products, |p| p.id);
        let details_by_order = group_by(details, |d| d.order_id);

        orders
            .iter()
            .filter(|o| o.client_id == client_id)
            .filter_map(|o| details_by_order.get(&o.id))
            .flatten()
            .map(|d| PurchasedProduct {
                product_id: d.product_id,
                product_name: products_by_id.get(&d.product_id).map(|p| p.name.clone()),
                quantity: d.quantity,
            })
            .collect()
    }

    /// Clients with at least one order containing `product_id`, each once.
    #[must_use]
    pub fn clients_who_purchased_product(
        details: &[OrderDetail],
        orders: &[Order],
        clients: &[Client],
        product_id: ProductId,
    ) -> Vec<Client> {
        let order_ids: HashSet<OrderId> = details
            .iter()
            .filter(|d| d.product_id == product_id)
            .map(|d| d.order_id)
            .collect();
        if order_ids.is_empty() {
            return Vec::new();
        }

        let client_ids: HashSet<ClientId> = orders
            .iter()
            .filter(|o| order_ids.contains(&o.id))
            .map(|o| o.client_id)
            .collect();

        let mut seen = HashSet::with_capacity(client_ids.len());
        clients
            .iter()
            .filter(|c| client_ids.contains(&c.id) && seen.insert(c.id))
            .cloned()
            .collect()
    }
}
