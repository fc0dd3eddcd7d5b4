//! `SeaORM` entities for the retail tables.
//!
//! Columns mirror the migration; the derive macros generate undocumented items.

#![allow(missing_docs)]

pub mod prelude;

pub mod clients;
pub mod order_details;
pub mod orders;
pub mod products;
