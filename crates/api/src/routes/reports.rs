//! Report routes.
//!
//! One GET endpoint per report. Empty results become 404 here; the report
//! engine itself never treats them as errors.

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use retail_core::{
    Client, Order, Product, ReportQueries,
    reports::{ClientOrderCount, OrderQuantityTotal, OrderWithDetails, ProductQuantity, PurchasedProduct},
};
use retail_db::ReportRepository;
use retail_shared::types::{ClientId, OrderId, ProductId};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{AppState, error::ApiError};

/// Creates the report routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/reports/clients-by-name/{name}", get(get_clients_by_name))
        .route(
            "/reports/products-above-price/{price}",
            get(get_products_above_price),
        )
        .route(
            "/reports/products-in-order/{order_id}",
            get(get_products_in_order),
        )
        .route(
            "/reports/total-products-in-order/{order_id}",
            get(get_total_products_in_order),
        )
        .route(
            "/reports/most-expensive-product",
            get(get_most_expensive_product),
        )
        .route(
            "/reports/orders-after-date/{date}",
            get(get_orders_after_date),
        )
        .route("/reports/average-price", get(get_average_price))
        .route(
            "/reports/products-without-description",
            get(get_products_without_description),
        )
        .route(
            "/reports/client-with-most-orders",
            get(get_client_with_most_orders),
        )
        .route("/reports/orders-with-details", get(get_orders_with_details))
        .route(
            "/reports/products-purchased-by-client/{client_id}",
            get(get_products_purchased_by_client),
        )
        .route(
            "/reports/clients-who-purchased-product/{product_id}",
            get(get_clients_who_purchased_product),
        )
}

// ============================================================================
// Response Types
// ============================================================================

/// Response for the average price report.
#[derive(Debug, Serialize)]
pub struct AveragePriceResponse {
    /// Mean product price.
    pub average_price: Decimal,
}

// ============================================================================
// Helper Functions
// ============================================================================

fn queries(state: &AppState) -> ReportQueries<ReportRepository> {
    ReportQueries::new(ReportRepository::new(Arc::clone(&state.db)))
}

fn parse_id<T: FromStr>(raw: &str, what: &str) -> Result<T, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::validation(format!("Invalid {what}: '{raw}'")))
}

fn parse_price(raw: &str) -> Result<Decimal, ApiError> {
    Decimal::from_str(raw.trim())
        .map_err(|_| ApiError::validation(format!("Invalid price: '{raw}'")))
}

/// Accepts an ISO datetime (seconds optional, with or without an offset) or a
/// bare date meaning midnight. Offsets are converted to UTC.
fn parse_date(raw: &str) -> Result<NaiveDateTime, ApiError> {
    const FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

    let raw = raw.trim();
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.naive_utc())
        })
        .or_else(|| {
            raw.parse::<NaiveDate>()
                .ok()
                .map(|d| d.and_time(NaiveTime::MIN))
        })
        .ok_or_else(|| ApiError::validation(format!("Invalid date: '{raw}'")))
}

fn non_empty<T>(items: Vec<T>, message: impl FnOnce() -> String) -> Result<Json<Vec<T>>, ApiError> {
    if items.is_empty() {
        return Err(ApiError::not_found(message()));
    }
    Ok(Json(items))
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /reports/clients-by-name/{name}
async fn get_clients_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<Client>>, ApiError> {
    let clients = queries(&state).clients_by_name(&name).await?;
    non_empty(clients, || format!("No clients found with name '{name}'"))
}

/// GET /reports/products-above-price/{price}
async fn get_products_above_price(
    State(state): State<AppState>,
    Path(price): Path<String>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let price = parse_price(&price)?;
    let products = queries(&state).products_above_price(price).await?;
    non_empty(products, || format!("No products found with price above {price}"))
}

/// GET /reports/products-in-order/{order_id}
async fn get_products_in_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<Vec<ProductQuantity>>, ApiError> {
    let order_id: OrderId = parse_id(&order_id, "order id")?;
    let lines = queries(&state).products_in_order(order_id).await?;
    non_empty(lines, || format!("No details found for order {order_id}"))
}

/// GET /reports/total-products-in-order/{order_id}
async fn get_total_products_in_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<OrderQuantityTotal>, ApiError> {
    let order_id: OrderId = parse_id(&order_id, "order id")?;
    let total = queries(&state).total_products_in_order(order_id).await?;
    Ok(Json(total))
}

/// GET /reports/most-expensive-product
async fn get_most_expensive_product(
    State(state): State<AppState>,
) -> Result<Json<Product>, ApiError> {
    queries(&state)
        .most_expensive_product()
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("No products available"))
}

/// GET /reports/orders-after-date/{date}
async fn get_orders_after_date(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<Vec<Order>>, ApiError> {
    let date = parse_date(&date)?;
    let orders = queries(&state).orders_after_date(date).await?;
    non_empty(orders, || format!("No orders found after {date}"))
}

/// GET /reports/average-price
async fn get_average_price(
    State(state): State<AppState>,
) -> Result<Json<AveragePriceResponse>, ApiError> {
    let average_price = queries(&state).average_price().await?;
    Ok(Json(AveragePriceResponse { average_price }))
}

/// GET /reports/products-without-description
async fn get_products_without_description(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = queries(&state).products_without_description().await?;
    non_empty(products, || "No products without description found".to_string())
}

/// GET /reports/client-with-most-orders
async fn get_client_with_most_orders(
    State(state): State<AppState>,
) -> Result<Json<ClientOrderCount>, ApiError> {
    queries(&state)
        .client_with_most_orders()
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("No clients available"))
}

/// GET /reports/orders-with-details
async fn get_orders_with_details(
    State(state): State<AppState>,
) -> Result<Json<Vec<OrderWithDetails>>, ApiError> {
    let orders = queries(&state).orders_with_details().await?;
    non_empty(orders, || "No orders found".to_string())
}

/// GET /reports/products-purchased-by-client/{client_id}
async fn get_products_purchased_by_client(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
) -> Result<Json<Vec<PurchasedProduct>>, ApiError> {
    let client_id: ClientId = parse_id(&client_id, "client id")?;
    let products = queries(&state)
        .products_purchased_by_client(client_id)
        .await?;
    non_empty(products, || {
        format!("No products purchased by client {client_id}")
    })
}

/// GET /reports/clients-who-purchased-product/{product_id}
async fn get_clients_who_purchased_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<Vec<Client>>, ApiError> {
    let product_id: ProductId = parse_id(&product_id, "product id")?;
    let clients = queries(&state)
        .clients_who_purchased_product(product_id)
        .await?;
    non_empty(clients, || {
        format!("No clients have purchased product {product_id}")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use retail_db::entities::{clients, order_details, orders, products};
    use rstest::rstest;
    use sea_orm::{DatabaseBackend, DatabaseConnection, DbErr, MockDatabase};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app(db: DatabaseConnection) -> Router {
        Router::new()
            .merge(routes())
            .with_state(AppState::new(db))
    }

    fn empty_db() -> DatabaseConnection {
        MockDatabase::new(DatabaseBackend::Postgres).into_connection()
    }

    fn product(id: i32, price: Decimal, description: Option<&str>) -> products::Model {
        products::Model {
            id,
            name: format!("Producto {id}"),
            price,
            description: description.map(String::from),
        }
    }

    fn sample_products() -> Vec<products::Model> {
        vec![
            product(1, Decimal::new(1050, 2), Some("This product is cheap")),
            product(2, Decimal::new(2500, 2), Some("This product is pretty")),
            product(3, Decimal::new(1575, 2), Some("This product is awesome")),
            product(4, Decimal::new(3020, 2), None),
        ]
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn test_clients_by_name() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                clients::Model {
                    id: 1,
                    name: "Juan Perez".to_string(),
                    email: "juan.perez@example.com".to_string(),
                },
                clients::Model {
                    id: 2,
                    name: "Ana Gomez".to_string(),
                    email: "ana.gomez@example.com".to_string(),
                },
            ]])
            .into_connection();

        let (status, body) = get(app(db), "/reports/clients-by-name/Perez").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([{ "id": 1, "name": "Juan Perez", "email": "juan.perez@example.com" }])
        );
    }

    #[tokio::test]
    async fn test_clients_by_name_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<clients::Model>::new()])
            .into_connection();

        let (status, body) = get(app(db), "/reports/clients-by-name/Nobody").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
        assert_eq!(body["message"], "No clients found with name 'Nobody'");
    }

    #[tokio::test]
    async fn test_total_products_in_order_is_always_ok() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                order_details::Model {
                    id: 1,
                    order_id: 1,
                    product_id: 2,
                    quantity: 2,
                },
                order_details::Model {
                    id: 2,
                    order_id: 1,
                    product_id: 1,
                    quantity: 1,
                },
            ]])
            .append_query_results([Vec::<order_details::Model>::new()])
            .into_connection();
        let app = app(db);

        let (status, body) = get(app.clone(), "/reports/total-products-in-order/1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "order_id": 1, "total_quantity": 3 }));

        let (status, body) = get(app, "/reports/total-products-in-order/5").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "order_id": 5, "total_quantity": 0 }));
    }

    #[tokio::test]
    async fn test_average_price() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([sample_products()])
            .into_connection();

        let (status, body) = get(app(db), "/reports/average-price").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "average_price": "20.3625" }));
    }

    #[tokio::test]
    async fn test_average_price_without_products() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<products::Model>::new()])
            .into_connection();

        let (status, body) = get(app(db), "/reports/average-price").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
    }

    #[tokio::test]
    async fn test_products_without_description() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([sample_products()])
            .into_connection();

        let (status, body) = get(app(db), "/reports/products-without-description").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().map(Vec::len), Some(1));
        assert_eq!(body[0]["id"], 4);
        assert_eq!(body[0]["description"], Value::Null);
    }

    #[tokio::test]
    async fn test_orders_after_date_accepts_bare_date() {
        let date = NaiveDate::from_ymd_opt(2025, 5, 3)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![orders::Model {
                id: 3,
                client_id: 2,
                order_date: date,
            }]])
            .into_connection();

        let (status, body) = get(app(db), "/reports/orders-after-date/2025-05-03").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["id"], 3);
        assert_eq!(body[0]["order_date"], "2025-05-03T12:00:00");
    }

    #[tokio::test]
    async fn test_client_with_most_orders_without_clients() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<clients::Model>::new()])
            .append_query_results([Vec::<orders::Model>::new()])
            .into_connection();

        let (status, _) = get(app(db), "/reports/client-with-most-orders").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_database_failure_is_internal_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection refused".to_string())])
            .into_connection();

        let (status, body) = get(app(db), "/reports/most-expensive-product").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "database_error");
        assert_eq!(body["message"], "An error occurred");
    }

    #[rstest]
    #[case("/reports/products-above-price/cheap")]
    #[case("/reports/products-in-order/first")]
    #[case("/reports/total-products-in-order/1.5")]
    #[case("/reports/orders-after-date/yesterday")]
    #[case("/reports/products-purchased-by-client/x")]
    #[case("/reports/clients-who-purchased-product/-")]
    #[tokio::test]
    async fn test_invalid_parameters_are_rejected(#[case] uri: &str) {
        let (status, body) = get(app(empty_db()), uri).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "validation_error");
    }

    #[rstest]
    #[case("2025-05-02T10:30:00", (2025, 5, 2, 10, 30))]
    #[case("2025-05-02 10:30:00", (2025, 5, 2, 10, 30))]
    #[case("2025-05-02T10:30", (2025, 5, 2, 10, 30))]
    #[case("2025-05-02T10:30:00Z", (2025, 5, 2, 10, 30))]
    #[case("2025-05-02T12:30:00+02:00", (2025, 5, 2, 10, 30))]
    #[case("2025-05-02", (2025, 5, 2, 0, 0))]
    fn test_parse_date(#[case] raw: &str, #[case] expected: (i32, u32, u32, u32, u32)) {
        let (y, m, d, h, min) = expected;
        let want = NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap();
        assert_eq!(parse_date(raw).unwrap(), want);
    }
}
