use std::sync::Arc;

use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use serde::Deserialize;
use tracing::{info, instrument};
use utoipa::ToSchema;

use crate::{
    client::category_client::{Category, CategoryClient},
    db::DbPool,
    entities::product::{self, Column as ProductColumn, Entity as Product},
};
use catalog_core::errors::ServiceError;

/// Input payload for creating a product.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateProductInput {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio", with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default)]
    pub stock: i32,
    #[serde(rename = "categoriaId")]
    pub category_id: i32,
}

/// Input payload for replacing a product. Only name, price and category
/// reference are mutable; stock is managed separately and left untouched.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateProductInput {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio", with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(rename = "categoriaId")]
    pub category_id: i32,
}

/// Service composing the product store with the category client.
pub struct ProductService {
    db_pool: Arc<DbPool>,
    category_client: Arc<CategoryClient>,
}

impl ProductService {
    pub fn new(db_pool: Arc<DbPool>, category_client: Arc<CategoryClient>) -> Self {
        Self {
            db_pool,
            category_client,
        }
    }

    /// List all products, oldest first.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<product::Model>, ServiceError> {
        let db = &*self.db_pool;
        let products = Product::find()
            .order_by_asc(ProductColumn::Id)
            .all(db)
            .await?;
        Ok(products)
    }

    /// Get a product by id.
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i32) -> Result<Option<product::Model>, ServiceError> {
        let db = &*self.db_pool;
        let product = Product::find_by_id(id).one(db).await?;
        Ok(product)
    }

    /// Create a new product; the store assigns the id. The category reference
    /// is stored as-is, without checking that the category exists.
    #[instrument(skip(self))]
    pub async fn create_product(
        &self,
        input: CreateProductInput,
    ) -> Result<product::Model, ServiceError> {
        let db = &*self.db_pool;

        let product = product::ActiveModel {
            name: Set(input.name),
            price: Set(input.price),
            stock: Set(input.stock),
            category_id: Set(input.category_id),
            ..Default::default()
        };
        let created = product.insert(db).await?;

        info!(product_id = created.id, name = %created.name, "product created");
        Ok(created)
    }

    /// Replace the mutable fields of an existing product. Fails with
    /// `ProductNotFound` when the id is absent.
    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: i32,
        input: UpdateProductInput,
    ) -> Result<product::Model, ServiceError> {
        let db = &*self.db_pool;

        let existing = Product::find_by_id(id)
            .one(db)
            .await?
            .ok_or(ServiceError::ProductNotFound(id))?;

        let mut product: product::ActiveModel = existing.into();
        product.name = Set(input.name);
        product.price = Set(input.price);
        product.category_id = Set(input.category_id);
        let updated = product.update(db).await?;

        info!(product_id = updated.id, "product updated");
        Ok(updated)
    }

    /// Delete a product by id. The delete is unconditional: removing an
    /// absent id still reports success.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i32) -> Result<(), ServiceError> {
        let db = &*self.db_pool;

        let result = Product::delete_by_id(id).exec(db).await?;
        info!(
            product_id = id,
            rows_affected = result.rows_affected,
            "product delete executed"
        );
        Ok(())
    }

    /// Resolve the category of a product through the category service.
    ///
    /// An absent product fails with `ProductNotFound` before any outbound
    /// call is made; the upstream's own failure modes surface as
    /// `CategoryNotFound` or `UpstreamUnavailable` through the client.
    #[instrument(skip(self))]
    pub async fn get_category_of_product(&self, product_id: i32) -> Result<Category, ServiceError> {
        let db = &*self.db_pool;

        let product = Product::find_by_id(product_id)
            .one(db)
            .await?
            .ok_or(ServiceError::ProductNotFound(product_id))?;

        self.category_client.get_category(product.category_id).await
    }
}
