use utoipa::OpenApi;

/// OpenAPI document for the product service, served at
/// `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::products::list_products,
        crate::handlers::products::get_product,
        crate::handlers::products::create_product,
        crate::handlers::products::update_product,
        crate::handlers::products::delete_product,
        crate::handlers::products::get_product_category,
    ),
    components(schemas(
        crate::entities::product::Model,
        crate::client::category_client::Category,
        crate::services::product_service::CreateProductInput,
        crate::services::product_service::UpdateProductInput,
        catalog_core::errors::ErrorResponse,
    )),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;
