use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::error::DbErr;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standard error body returned by every service in the workspace.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "error": "Not Found",
    "message": "Product with id 42 not found",
    "details": null,
    "timestamp": "2025-08-25T10:30:00.000Z"
}))]
pub struct ErrorResponse {
    /// HTTP status category (e.g., "Not Found", "Bad Gateway")
    #[schema(example = "Not Found")]
    pub error: String,
    /// Human-readable error description
    #[schema(example = "Product with id 42 not found")]
    pub message: String,
    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// ISO 8601 timestamp when the error occurred
    #[schema(example = "2025-08-25T10:30:00.000Z")]
    pub timestamp: String,
}

/// Error taxonomy shared by the catalog services.
///
/// The product-not-found, category-not-found and upstream-failure conditions
/// are deliberately distinct variants: the two-hop category lookup must never
/// collapse them into a single signal.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] DbErr),

    #[error("Product with id {0} not found")]
    ProductNotFound(i32),

    #[error("Category with id {0} not found")]
    CategoryNotFound(i32),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Category service unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ServiceError {
    /// Returns the HTTP status code for this error.
    /// This is the single source of truth for error-to-status mapping.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ProductNotFound(_) | Self::CategoryNotFound(_) | Self::NotFound(_) => {
                StatusCode::NOT_FOUND
            }
            Self::ValidationError(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::UpstreamUnavailable(_) => StatusCode::BAD_GATEWAY,
            Self::DatabaseError(_) | Self::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the error message suitable for HTTP responses.
    /// Internal errors return generic messages to avoid leaking implementation details.
    pub fn response_message(&self) -> String {
        match self {
            Self::DatabaseError(_) => "Database error".to_string(),
            Self::InternalError(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: status.canonical_reason().unwrap_or("Error").to_string(),
            message: self.response_message(),
            details: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "request failed");
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_variants_map_to_404() {
        assert_eq!(
            ServiceError::ProductNotFound(1).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServiceError::CategoryNotFound(1).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServiceError::NotFound("no route".into()).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn upstream_failure_maps_to_bad_gateway() {
        let err = ServiceError::UpstreamUnavailable("connection refused".into());
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn product_and_category_not_found_carry_distinct_messages() {
        let product = ServiceError::ProductNotFound(7).response_message();
        let category = ServiceError::CategoryNotFound(7).response_message();
        assert!(product.contains("Product"));
        assert!(category.contains("Category"));
        assert_ne!(product, category);
    }

    #[test]
    fn internal_errors_hide_details_from_clients() {
        let err = ServiceError::InternalError("connection pool exhausted".into());
        assert_eq!(err.response_message(), "Internal server error");

        let err = ServiceError::DatabaseError(DbErr::Custom("table missing".into()));
        assert_eq!(err.response_message(), "Database error");
    }
}
