use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{error, instrument, warn};
use utoipa::ToSchema;

use catalog_core::errors::ServiceError;

/// Category as served by the category service. Returned unmodified to
/// callers of the product/category lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
}

/// Typed outbound caller for the category service.
///
/// Each failure mode keeps its own signal: an upstream 404 becomes
/// `CategoryNotFound`, while transport errors, timeouts and upstream 5xx all
/// become `UpstreamUnavailable`. Neither is ever folded into the
/// product-not-found condition.
pub struct CategoryClient {
    http: reqwest::Client,
    base_url: String,
}

impl CategoryClient {
    /// Builds a client with a fixed per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ServiceError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ServiceError::InternalError(format!("http client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch one category by id from the category service.
    #[instrument(skip(self))]
    pub async fn get_category(&self, id: i32) -> Result<Category, ServiceError> {
        let url = format!("{}/api/categorias/{}", self.base_url, id);

        let response = self.http.get(&url).send().await.map_err(|e| {
            error!(category_id = id, error = %e, "category service request failed");
            ServiceError::UpstreamUnavailable(e.to_string())
        })?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(ServiceError::CategoryNotFound(id)),
            status if status.is_success() => response.json::<Category>().await.map_err(|e| {
                error!(category_id = id, error = %e, "category service returned malformed body");
                ServiceError::UpstreamUnavailable(format!("malformed category body: {e}"))
            }),
            status => {
                warn!(category_id = id, status = %status, "category service returned an error status");
                Err(ServiceError::UpstreamUnavailable(format!(
                    "category service returned {status}"
                )))
            }
        }
    }
}
