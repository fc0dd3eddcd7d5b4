//! Report result types.

use chrono::NaiveDateTime;
use retail_shared::types::{OrderId, ProductId};
use serde::{Deserialize, Serialize};

use crate::catalog::Client;

/// Product name and ordered quantity for one line of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductQuantity {
    /// Product name.
    pub product_name: String,
    /// Units ordered.
    pub quantity: i32,
}

/// Total units across all lines of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderQuantityTotal {
    /// Order ID.
    pub order_id: OrderId,
    /// Sum of line quantities; zero when the order has no lines.
    pub total_quantity: i64,
}

/// A client together with how many orders they placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientOrderCount {
    /// The client.
    pub client: Client,
    /// Number of orders referencing the client.
    pub order_count: usize,
}

/// An order line with its product name resolved, if possible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Product name, `None` when the product cannot be found.
    pub product_name: Option<String>,
    /// Units ordered.
    pub quantity: i32,
}

/// An order with its client name and resolved lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderWithDetails {
    /// Order ID.
    pub order_id: OrderId,
    /// When the order was placed.
    pub order_date: NaiveDateTime,
    /// Client name, `None` when the client cannot be found.
    pub client_name: Option<String>,
    /// Lines of the order, in detail input order.
    pub details: Vec<OrderLine>,
}

/// A product line bought by a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchasedProduct {
    /// Product ID.
    pub product_id: ProductId,
    /// Product name, `None` when the product cannot be found.
    pub product_name: Option<String>,
    /// Units ordered.
    pub quantity: i32,
}
