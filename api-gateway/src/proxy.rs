use axum::{
    body::{self, Body},
    extract::{Request, State},
    http::header,
    response::Response,
};
use tracing::{debug, error, instrument};

use crate::GatewayState;
use catalog_core::errors::ServiceError;

/// Forwarded bodies are small JSON documents; cap them defensively.
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Forward an inbound request to the owning service, selected by path prefix.
///
/// The gateway relays method, path, query, body and content type, and hands
/// back the upstream status, content type and body unmodified. An unreachable
/// upstream surfaces as 502.
#[instrument(skip_all, fields(method = %req.method(), path = %req.uri().path()))]
pub async fn forward(
    State(state): State<GatewayState>,
    req: Request<Body>,
) -> Result<Response, ServiceError> {
    let path = req.uri().path().to_string();
    let upstream_base = route_for(&state, &path)?;

    let mut url = format!("{}{}", upstream_base.trim_end_matches('/'), path);
    if let Some(query) = req.uri().query() {
        url.push('?');
        url.push_str(query);
    }

    let method = req.method().clone();
    let content_type = req.headers().get(header::CONTENT_TYPE).cloned();
    let body_bytes = body::to_bytes(req.into_body(), MAX_BODY_BYTES)
        .await
        .map_err(|e| ServiceError::BadRequest(format!("unreadable request body: {e}")))?;

    debug!(%url, "forwarding request");

    let mut outbound = state.http.request(method, &url);
    if let Some(content_type) = content_type {
        outbound = outbound.header(header::CONTENT_TYPE, content_type);
    }
    if !body_bytes.is_empty() {
        outbound = outbound.body(body_bytes);
    }

    let upstream_response = outbound.send().await.map_err(|e| {
        error!(%url, error = %e, "upstream request failed");
        ServiceError::UpstreamUnavailable(e.to_string())
    })?;

    let status = upstream_response.status();
    let content_type = upstream_response.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = upstream_response
        .bytes()
        .await
        .map_err(|e| ServiceError::UpstreamUnavailable(format!("upstream body: {e}")))?;

    let mut response = Response::builder().status(status);
    if let Some(content_type) = content_type {
        response = response.header(header::CONTENT_TYPE, content_type);
    }
    response
        .body(Body::from(bytes))
        .map_err(|e| ServiceError::InternalError(format!("relay response: {e}")))
}

fn route_for<'a>(state: &'a GatewayState, path: &str) -> Result<&'a str, ServiceError> {
    if path.starts_with("/api/categorias") {
        Ok(&state.config.categoria_service_url)
    } else if path.starts_with("/api/productos") {
        Ok(&state.config.producto_service_url)
    } else {
        Err(ServiceError::NotFound(format!("no route for {path}")))
    }
}
