//! Entity re-exports.

pub use super::clients::Entity as Clients;
pub use super::order_details::Entity as OrderDetails;
pub use super::orders::Entity as Orders;
pub use super::products::Entity as Products;
