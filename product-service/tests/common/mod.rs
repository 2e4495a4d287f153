use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use axum::{
    body::{self, Body},
    extract::{Path, State},
    http::{header, Method, Request, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use sea_orm::{ConnectOptions, Database};
use serde_json::{json, Value};
use tower::ServiceExt;

use product_service::{app_router, config::AppConfig, db, AppState};

/// Test harness backed by an in-memory SQLite database and a configurable
/// category service base URL.
pub struct TestApp {
    router: Router,
}

impl TestApp {
    /// Construct a test application with a fresh schema.
    pub async fn new(category_service_url: &str) -> Self {
        let cfg = AppConfig::new(
            "sqlite::memory:".to_string(),
            "127.0.0.1".to_string(),
            18_082,
            "test".to_string(),
            category_service_url.to_string(),
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

        let state = AppState::new(Arc::new(pool), cfg).expect("app state");
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

#[derive(Clone)]
struct StubState {
    hits: Arc<AtomicUsize>,
    categories: Arc<HashMap<i32, String>>,
}

/// Stub category upstream that counts how often it is called.
pub struct StubCategoryService {
    pub base_url: String,
    pub hits: Arc<AtomicUsize>,
}

impl StubCategoryService {
    pub fn hit_count(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Serve a stub category service on an ephemeral port.
pub async fn spawn_stub_category_service(categories: &[(i32, &str)]) -> StubCategoryService {
    let hits = Arc::new(AtomicUsize::new(0));
    let map: HashMap<i32, String> = categories
        .iter()
        .map(|(id, name)| (*id, name.to_string()))
        .collect();
    let state = StubState {
        hits: hits.clone(),
        categories: Arc::new(map),
    };

    let router = Router::new()
        .route("/api/categorias/:id", get(stub_get_category))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub server");
    });

    StubCategoryService {
        base_url: format!("http://{addr}"),
        hits,
    }
}

async fn stub_get_category(State(state): State<StubState>, Path(id): Path<i32>) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    match state.categories.get(&id) {
        Some(name) => (StatusCode::OK, Json(json!({"id": id, "nombre": name}))).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Returns a base URL on which nothing is listening.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe listener");
    let addr = listener.local_addr().expect("probe addr");
    drop(listener);
    format!("http://{addr}")
}
