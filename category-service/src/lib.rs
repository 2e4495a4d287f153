//! Category Service
//!
//! Owns the `categories` table and exposes it over REST at `/api/categorias`.
//! The product service resolves a product's category through this API.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod config;
pub mod db;
pub mod entities;
pub mod handlers;
pub mod migrator;
pub mod openapi;
pub mod services;

use std::sync::Arc;

use axum::{response::Json, routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::services::category_service::CategoryService;

/// Shared application state for HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<db::DbPool>,
    pub config: config::AppConfig,
    pub categories: Arc<CategoryService>,
}

impl AppState {
    pub fn new(db: Arc<db::DbPool>, config: config::AppConfig) -> Self {
        let categories = Arc::new(CategoryService::new(db.clone()));
        Self {
            db,
            config,
            categories,
        }
    }
}

/// Builds the full service router. Shared between `main` and the test harness.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/categorias", handlers::categories::categories_routes())
        .nest("/health", handlers::health::health_routes())
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(openapi::ApiDoc::openapi()) }),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
