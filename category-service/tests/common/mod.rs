use axum::{
    body::{self, Body},
    http::{header, Method, Request},
    response::Response,
    Router,
};
use sea_orm::{ConnectOptions, Database};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use category_service::{app_router, config::AppConfig, db, AppState};

/// Test harness backed by an in-memory SQLite database.
pub struct TestApp {
    router: Router,
}

impl TestApp {
    /// Construct a test application with a fresh schema.
    pub async fn new() -> Self {
        let cfg = AppConfig::new(
            "sqlite::memory:".to_string(),
            "127.0.0.1".to_string(),
            18_081,
            "test".to_string(),
        );

        // A single connection keeps every query on the same in-memory database.
        let mut opt = ConnectOptions::new(cfg.database_url.clone());
        opt.max_connections(1).min_connections(1);
        let pool = Database::connect(opt)
            .await
            .expect("failed to create test database");

        db::run_migrations(&pool)
            .await
            .expect("failed to run migrations in tests");

        let state = AppState::new(Arc::new(pool), cfg);
        Self {
            router: app_router(state),
        }
    }

    /// Issue a request against the in-process router.
    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        self.router
            .clone()
            .oneshot(builder.body(body).expect("request"))
            .await
            .expect("response")
    }
}

pub async fn response_json(response: Response) -> Value {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body bytes");
    serde_json::from_slice(&bytes).expect("json response")
}
