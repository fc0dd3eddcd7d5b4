//! Retail report generation.
//!
//! Twelve canned reports over the four catalog collections:
//! - Clients by name, products above a price, orders after a date
//! - Order contents and totals
//! - Most expensive product and average price
//! - Products without description
//! - Client with the most orders
//! - Orders with details, products bought by a client, clients who bought a product
//!
//! [`ReportService`] holds the pure functions; [`ReportQueries`] loads the
//! collections from a [`DataSource`] and runs them.

pub mod error;
pub mod lookup;
pub mod queries;
pub mod service;
pub mod source;
pub mod types;

#[cfg(test)]
mod fixtures;

pub use error::ReportError;
pub use queries::ReportQueries;
pub use service::ReportService;
pub use source::{DataSource, Dataset};
pub use types::*;
