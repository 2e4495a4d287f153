//! API Gateway
//!
//! Single entry point for the catalog frontend: dispatches `/api/categorias*`
//! and `/api/productos*` to their owning services by path prefix and applies
//! the cross-origin policy at the edge so the services never need their own.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod config;
pub mod proxy;

use std::time::Duration;

use axum::{
    http::Method,
    response::{IntoResponse, Json},
    routing::{any, get},
    Router,
};
use serde_json::json;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::proxy::forward;

/// Shared gateway state: the outbound HTTP client plus routing targets.
#[derive(Clone)]
pub struct GatewayState {
    pub http: reqwest::Client,
    pub config: config::AppConfig,
}

impl GatewayState {
    pub fn new(config: config::AppConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()?;
        Ok(Self { http, config })
    }
}

/// Builds the gateway router. Shared between `main` and the test harness.
pub fn gateway_router(state: GatewayState) -> Router {
    // Any origin pattern, common verbs, all headers, credential-less,
    // fixed preflight cache window.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
            Method::HEAD,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(state.config.cors_max_age_secs));

    Router::new()
        .route("/health/live", get(liveness_check))
        .route("/api/categorias", any(forward))
        .route("/api/categorias/*path", any(forward))
        .route("/api/productos", any(forward))
        .route("/api/productos/*path", any(forward))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Basic liveness probe - just checks if the gateway is running
async fn liveness_check() -> impl IntoResponse {
    Json(json!({
        "status": "up",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
