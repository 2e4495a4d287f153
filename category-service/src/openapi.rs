use utoipa::OpenApi;

/// OpenAPI document for the category service, served at
/// `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::categories::list_categories,
        crate::handlers::categories::get_category,
        crate::handlers::categories::create_category,
        crate::handlers::categories::update_category,
        crate::handlers::categories::delete_category,
    ),
    components(schemas(
        crate::entities::category::Model,
        crate::services::category_service::CategoryInput,
        catalog_core::errors::ErrorResponse,
    )),
    tags(
        (name = "Categories", description = "Category catalog endpoints")
    )
)]
pub struct ApiDoc;
