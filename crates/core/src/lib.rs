//! Core business logic for the retail reports service.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//!
//! # Modules
//!
//! - `catalog` - Client, product, order and order detail entities
//! - `reports` - The report engine and its data-source seam

pub mod catalog;
pub mod reports;

pub use catalog::{Client, Order, OrderDetail, Product};
pub use reports::{DataSource, Dataset, ReportError, ReportQueries, ReportService};
