//! Boots the real category service, product service and gateway on ephemeral
//! ports and drives them through the typed client, end to end.

mod common;

use std::sync::Arc;

use axum::Router;
use sea_orm::{ConnectOptions, Database};

use api_gateway::{gateway_router, GatewayState};
use catalog_client::{CatalogClient, ClientError, ProductForm};
use rust_decimal_macros::dec;

use common::{spawn, unreachable_base_url};

async fn category_service_router() -> Router {
    let cfg = category_service::config::AppConfig::new(
        "sqlite::memory:".into(),
        "127.0.0.1".into(),
        0,
        "test".into(),
    );
    // A single connection keeps every query on the same in-memory database.
    let mut opt = ConnectOptions::new(cfg.database_url.clone());
    opt.max_connections(1).min_connections(1);
    let pool = Database::connect(opt).await.expect("category database");
    category_service::db::run_migrations(&pool)
        .await
        .expect("category migrations");
    category_service::app_router(category_service::AppState::new(Arc::new(pool), cfg))
}

async fn product_service_router(category_service_url: &str) -> Router {
    let cfg = product_service::config::AppConfig::new(
        "sqlite::memory:".into(),
        "127.0.0.1".into(),
        0,
        "test".into(),
        category_service_url.to_string(),
    );
    let mut opt = ConnectOptions::new(cfg.database_url.clone());
    opt.max_connections(1).min_connections(1);
    let pool = Database::connect(opt).await.expect("product database");
    product_service::db::run_migrations(&pool)
        .await
        .expect("product migrations");
    product_service::app_router(
        product_service::AppState::new(Arc::new(pool), cfg).expect("product state"),
    )
}

async fn spawn_stack(category_service_url: Option<String>) -> CatalogClient {
    let categoria_url = match category_service_url {
        Some(url) => url,
        None => spawn(category_service_router().await).await,
    };
    let producto_url = spawn(product_service_router(&categoria_url).await).await;

    let cfg = api_gateway::config::AppConfig::new(
        "127.0.0.1".into(),
        0,
        "test".into(),
        categoria_url,
        producto_url,
    );
    let state = GatewayState::new(cfg).expect("gateway state");
    let gateway_url = spawn(gateway_router(state)).await;

    CatalogClient::new(&gateway_url).expect("client")
}

#[tokio::test]
async fn electronics_laptop_round_trip_through_the_gateway() {
    let client = spawn_stack(None).await;

    let electronics = client
        .create_category("Electronica")
        .await
        .expect("create category");
    assert_eq!(electronics.name, "Electronica");

    let laptop = client
        .create_product(&ProductForm {
            name: "Laptop".into(),
            price: dec!(1200.50),
            stock: 10,
            category_id: electronics.id,
        })
        .await
        .expect("create product");
    assert_eq!(laptop.name, "Laptop");
    assert_eq!(laptop.price, dec!(1200.50));
    assert_eq!(laptop.category_id, electronics.id);

    let resolved = client
        .category_of_product(laptop.id)
        .await
        .expect("category lookup");
    assert_eq!(resolved, electronics);

    let products = client.list_products().await.expect("list products");
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Laptop");
}

#[tokio::test]
async fn deleting_the_category_turns_the_lookup_into_a_404() {
    let client = spawn_stack(None).await;

    let category = client.create_category("Hogar").await.expect("category");
    let product = client
        .create_product(&ProductForm {
            name: "Aspiradora".into(),
            price: dec!(99.75),
            stock: 4,
            category_id: category.id,
        })
        .await
        .expect("product");

    client
        .delete_category(category.id)
        .await
        .expect("delete category");

    // The product row still exists; only the lookup fails.
    let still_there = client.get_product(product.id).await.expect("get product");
    assert_eq!(still_there.category_id, category.id);

    let err = client.category_of_product(product.id).await.unwrap_err();
    assert!(err.is_not_found());
    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, format!("Category with id {} not found", category.id));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_category_service_surfaces_as_bad_gateway() {
    let client = spawn_stack(Some(unreachable_base_url().await)).await;

    let product = client
        .create_product(&ProductForm {
            name: "Teclado".into(),
            price: dec!(45.25),
            stock: 20,
            category_id: 3,
        })
        .await
        .expect("create product");

    let err = client.category_of_product(product.id).await.unwrap_err();
    match err {
        ClientError::Api { status, .. } => assert_eq!(status, 502),
        other => panic!("expected Api error, got {other:?}"),
    }
}
