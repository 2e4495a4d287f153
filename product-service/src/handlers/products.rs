use axum::{
    extract::{Json, Path, State},
    response::IntoResponse,
    routing::get,
    Router,
};

use crate::{
    services::product_service::{CreateProductInput, UpdateProductInput},
    AppState,
};
use catalog_core::{
    errors::ServiceError,
    response::{created_response, no_content_response, success_response},
};

/// Creates the router for product endpoints
pub fn products_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/:id/categoria", get(get_product_category))
}

/// List all products
#[utoipa::path(
    get,
    path = "/api/productos",
    responses(
        (status = 200, description = "All products", body = [crate::entities::product::Model])
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ServiceError> {
    let products = state.products.list_products().await?;
    Ok(success_response(products))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/api/productos/{id}",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product found", body = crate::entities::product::Model),
        (status = 404, description = "Product not found", body = catalog_core::errors::ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let product = state
        .products
        .get_product(id)
        .await?
        .ok_or(ServiceError::ProductNotFound(id))?;
    Ok(success_response(product))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "/api/productos",
    request_body = CreateProductInput,
    responses(
        (status = 201, description = "Product created", body = crate::entities::product::Model)
    ),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductInput>,
) -> Result<impl IntoResponse, ServiceError> {
    let product = state.products.create_product(payload).await?;
    Ok(created_response(product))
}

/// Replace an existing product
#[utoipa::path(
    put,
    path = "/api/productos/{id}",
    params(("id" = i32, Path, description = "Product id")),
    request_body = UpdateProductInput,
    responses(
        (status = 200, description = "Product updated", body = crate::entities::product::Model),
        (status = 404, description = "Product not found", body = catalog_core::errors::ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateProductInput>,
) -> Result<impl IntoResponse, ServiceError> {
    let product = state.products.update_product(id, payload).await?;
    Ok(success_response(product))
}

/// Delete a product by id (unconditional; absent ids still succeed)
#[utoipa::path(
    delete,
    path = "/api/productos/{id}",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 204, description = "Product deleted")
    ),
    tag = "Products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    state.products.delete_product(id).await?;
    Ok(no_content_response())
}

/// Resolve the category of a product via the category service
#[utoipa::path(
    get,
    path = "/api/productos/{id}/categoria",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Category of the product", body = crate::client::category_client::Category),
        (status = 404, description = "Product or category not found", body = catalog_core::errors::ErrorResponse),
        (status = 502, description = "Category service unavailable", body = catalog_core::errors::ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn get_product_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let category = state.products.get_category_of_product(id).await?;
    Ok(success_response(category))
}
