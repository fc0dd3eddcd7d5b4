//! Catalog entity types.

use chrono::NaiveDateTime;
use retail_shared::types::{ClientId, OrderDetailId, OrderId, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A customer who places orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Client ID.
    pub id: ClientId,
    /// Full name.
    pub name: String,
    /// Contact email.
    pub email: String,
}

/// A sellable product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product ID.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price, two decimal places.
    pub price: Decimal,
    /// Optional free-text description.
    pub description: Option<String>,
}

impl Product {
    /// Returns true when the description is missing or empty.
    #[must_use]
    pub fn lacks_description(&self) -> bool {
        self.description.as_deref().is_none_or(str::is_empty)
    }
}

/// An order placed by a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Order ID.
    pub id: OrderId,
    /// Owning client.
    pub client_id: ClientId,
    /// When the order was placed.
    pub order_date: NaiveDateTime,
}

/// One product line of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDetail {
    /// Detail ID.
    pub id: OrderDetailId,
    /// Parent order.
    pub order_id: OrderId,
    /// Ordered product.
    pub product_id: ProductId,
    /// Units ordered.
    pub quantity: i32,
}
