use axum::{
    extract::{Json, Path, State},
    response::IntoResponse,
    routing::get,
    Router,
};

use crate::{services::category_service::CategoryInput, AppState};
use catalog_core::{
    errors::ServiceError,
    response::{created_response, no_content_response, success_response},
};

/// Creates the router for category endpoints
pub fn categories_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route(
            "/:id",
            get(get_category)
                .put(update_category)
                .delete(delete_category),
        )
}

/// List all categories
#[utoipa::path(
    get,
    path = "/api/categorias",
    responses(
        (status = 200, description = "All categories", body = [crate::entities::category::Model])
    ),
    tag = "Categories"
)]
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ServiceError> {
    let categories = state.categories.list_categories().await?;
    Ok(success_response(categories))
}

/// Get a category by id
#[utoipa::path(
    get,
    path = "/api/categorias/{id}",
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category found", body = crate::entities::category::Model),
        (status = 404, description = "Category not found", body = catalog_core::errors::ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let category = state
        .categories
        .get_category(id)
        .await?
        .ok_or(ServiceError::CategoryNotFound(id))?;
    Ok(success_response(category))
}

/// Create a new category
#[utoipa::path(
    post,
    path = "/api/categorias",
    request_body = CategoryInput,
    responses(
        (status = 201, description = "Category created", body = crate::entities::category::Model)
    ),
    tag = "Categories"
)]
pub async fn create_category(
    State(state): State<AppState>,
    Json(payload): Json<CategoryInput>,
) -> Result<impl IntoResponse, ServiceError> {
    let category = state.categories.create_category(payload).await?;
    Ok(created_response(category))
}

/// Replace an existing category
#[utoipa::path(
    put,
    path = "/api/categorias/{id}",
    params(("id" = i32, Path, description = "Category id")),
    request_body = CategoryInput,
    responses(
        (status = 200, description = "Category updated", body = crate::entities::category::Model),
        (status = 404, description = "Category not found", body = catalog_core::errors::ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CategoryInput>,
) -> Result<impl IntoResponse, ServiceError> {
    let category = state.categories.update_category(id, payload).await?;
    Ok(success_response(category))
}

/// Delete a category by id
#[utoipa::path(
    delete,
    path = "/api/categorias/{id}",
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 404, description = "Category not found", body = catalog_core::errors::ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    state.categories.delete_category(id).await?;
    Ok(no_content_response())
}
