//! Product Service
//!
//! Owns the `products` table and exposes it over REST at `/api/productos`.
//! A product references its category by id only; the reference is not checked
//! at write time and is resolved lazily through the category service on
//! `GET /api/productos/{id}/categoria`.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod client;
pub mod config;
pub mod db;
pub mod entities;
pub mod handlers;
pub mod migrator;
pub mod openapi;
pub mod services;

use std::{sync::Arc, time::Duration};

use axum::{response::Json, routing::get, Router};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use utoipa::OpenApi;

use crate::{client::category_client::CategoryClient, services::product_service::ProductService};
use catalog_core::errors::ServiceError;

/// Shared application state for HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<db::DbPool>,
    pub config: config::AppConfig,
    pub products: Arc<ProductService>,
}

impl AppState {
    pub fn new(db: Arc<db::DbPool>, config: config::AppConfig) -> Result<Self, ServiceError> {
        let category_client = Arc::new(CategoryClient::new(
            &config.category_service_url,
            Duration::from_secs(config.http_client_timeout_secs),
        )?);
        let products = Arc::new(ProductService::new(db.clone(), category_client));
        Ok(Self {
            db,
            config,
            products,
        })
    }
}

/// Builds the full service router. Shared between `main` and the test harness.
///
/// The inbound timeout budget sits above the outbound client timeout so a
/// stalled category upstream cannot hold inbound requests open indefinitely.
pub fn app_router(state: AppState) -> Router {
    let request_timeout = Duration::from_secs(state.config.request_timeout_secs);

    Router::new()
        .nest("/api/productos", handlers::products::products_routes())
        .nest("/health", handlers::health::health_routes())
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(openapi::ApiDoc::openapi()) }),
        )
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
        .with_state(state)
}
