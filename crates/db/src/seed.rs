//! Sample dataset for development.
//!
//! Four clients, four products, seven orders and seven order lines. Inserted
//! through a [`UnitOfWork`] so a failure leaves the store untouched.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, DbErr, Set};
use tracing::info;

use crate::entities::{clients, order_details, orders, products};
use crate::repositories::{GenericRepository, UnitOfWork};

/// (name, email)
pub const CLIENTS: [(&str, &str); 4] = [
    ("Juan Pérez", "juan.perez@example.com"),
    ("Ana Gómez", "ana.gomez@example.com"),
    ("Carlos Díaz", "carlos.diaz@example.com"),
    ("Lucía Martínez", "lucia.martinez@example.com"),
];

/// (name, price in cents, description)
pub const PRODUCTS: [(&str, i64, Option<&str>); 4] = [
    ("Producto A", 1050, Some("This product is cheap")),
    ("Producto B", 2500, Some("This product is pretty")),
    ("Producto C", 1575, Some("This product is awesome")),
    ("Producto D", 3020, None),
];

/// (client index, May 2025 day, hour)
pub const ORDERS: [(usize, u32, u32); 7] = [
    (0, 1, 10),
    (0, 2, 11),
    (1, 3, 12),
    (1, 4, 13),
    (2, 5, 14),
    (2, 6, 15),
    (3, 7, 16),
];

/// (order index, product index, quantity)
pub const ORDER_DETAILS: [(usize, usize, i32); 7] = [
    (0, 1, 2),
    (0, 0, 1),
    (1, 2, 1),
    (1, 3, 1),
    (2, 0, 3),
    (2, 1, 2),
    (3, 2, 1),
];

fn order_date(day: u32, hour: u32) -> Result<NaiveDateTime, DbErr> {
    NaiveDate::from_ymd_opt(2025, 5, day)
        .and_then(|d| d.and_hms_opt(hour, 0, 0))
        .ok_or_else(|| DbErr::Custom(format!("invalid seed date: 2025-05-{day} {hour}:00")))
}

fn key(ids: &[i32], index: usize) -> Result<i32, DbErr> {
    ids.get(index)
        .copied()
        .ok_or_else(|| DbErr::Custom(format!("seed row references missing index {index}")))
}

/// Inserts the sample dataset when the clients table is empty.
///
/// Returns `true` if rows were inserted.
///
/// # Errors
///
/// Returns an error if any query fails; nothing is committed in that case.
pub async fn seed_if_empty(db: &DatabaseConnection) -> Result<bool, DbErr> {
    let existing = GenericRepository::<clients::Entity, _>::new(db)
        .count()
        .await?;
    if existing > 0 {
        info!(existing, "Clients already present, skipping seed");
        return Ok(false);
    }

    let uow = UnitOfWork::begin(db).await?;

    let mut client_ids = Vec::with_capacity(CLIENTS.len());
    for (name, email) in CLIENTS {
        let client = uow
            .clients()
            .add(clients::ActiveModel {
                name: Set(name.to_string()),
                email: Set(email.to_string()),
                ..Default::default()
            })
            .await?;
        client_ids.push(client.id);
    }

    let mut product_ids = Vec::with_capacity(PRODUCTS.len());
    for (name, cents, description) in PRODUCTS {
        let product = uow
            .products()
            .add(products::ActiveModel {
                name: Set(name.to_string()),
                price: Set(Decimal::new(cents, 2)),
                description: Set(description.map(String::from)),
                ..Default::default()
            })
            .await?;
        product_ids.push(product.id);
    }

    let mut order_ids = Vec::with_capacity(ORDERS.len());
    for (client, day, hour) in ORDERS {
        let order = uow
            .orders()
            .add(orders::ActiveModel {
                client_id: Set(key(&client_ids, client)?),
                order_date: Set(order_date(day, hour)?),
                ..Default::default()
            })
            .await?;
        order_ids.push(order.id);
    }

    for (order, product, quantity) in ORDER_DETAILS {
        uow.order_details()
            .add(order_details::ActiveModel {
                order_id: Set(key(&order_ids, order)?),
                product_id: Set(key(&product_ids, product)?),
                quantity: Set(quantity),
                ..Default::default()
            })
            .await?;
    }

    let written = uow.complete().await?;
    info!(written, "Seeded sample dataset");
    Ok(true)
}
