//! Sample dataset shared by the report tests.

use chrono::{NaiveDate, NaiveDateTime};
use retail_shared::types::{ClientId, OrderDetailId, OrderId, ProductId};
use rust_decimal_macros::dec;

use super::source::Dataset;
use crate::catalog::{Client, Order, OrderDetail, Product};

pub fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 5, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

pub fn client(id: i32, name: &str) -> Client {
    Client {
        id: ClientId::new(id),
        name: name.to_string(),
        email: format!("client{id}@example.com"),
    }
}

pub fn product(id: i32, price: rust_decimal::Decimal, description: Option<&str>) -> Product {
    Product {
        id: ProductId::new(id),
        name: format!("Product {id}"),
        price,
        description: description.map(String::from),
    }
}

pub fn order(id: i32, client_id: i32, date: NaiveDateTime) -> Order {
    Order {
        id: OrderId::new(id),
        client_id: ClientId::new(client_id),
        order_date: date,
    }
}

pub fn detail(id: i32, order_id: i32, product_id: i32, quantity: i32) -> OrderDetail {
    OrderDetail {
        id: OrderDetailId::new(id),
        order_id: OrderId::new(order_id),
        product_id: ProductId::new(product_id),
        quantity,
    }
}

pub fn sample_dataset() -> Dataset {
    Dataset {
        clients: vec![
            client(1, "Juan Pérez"),
            client(2, "Ana Gómez"),
            client(3, "Carlos Díaz"),
            client(4, "Lucía Martínez"),
        ],
        products: vec![
            product(1, dec!(10.50), Some("This product is cheap")),
            product(2, dec!(25.00), Some("This product is pretty")),
            product(3, dec!(15.75), Some("This product is awesome")),
            product(4, dec!(30.20), None),
        ],
        orders: vec![
            order(1, 1, at(1, 10)),
            order(2, 1, at(2, 11)),
            order(3, 2, at(3, 12)),
            order(4, 2, at(4, 13)),
            order(5, 3, at(5, 14)),
            order(6, 3, at(6, 15)),
            order(7, 4, at(7, 16)),
        ],
        order_details: vec![
            detail(1, 1, 2, 2),
            detail(2, 1, 1, 1),
            detail(3, 2, 3, 1),
            detail(4, 2, 4, 1),
            detail(5, 3, 1, 3),
            detail(6, 3, 2, 2),
            detail(7, 4, 3, 1),
        ],
    }
}
