//! Retail catalog entities.
//!
//! Plain data carriers for the four tables of the dataset. Relationships are
//! expressed by identifier only; there are no back-references.

pub mod types;

pub use types::{Client, Order, OrderDetail, Product};
