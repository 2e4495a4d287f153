use std::sync::Arc;

use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, QueryOrder, Set};
use serde::Deserialize;
use tracing::{info, instrument};
use utoipa::ToSchema;

use crate::{
    db::DbPool,
    entities::category::{self, Column as CategoryColumn, Entity as Category},
};
use catalog_core::errors::ServiceError;

/// Input payload for creating or replacing a category.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CategoryInput {
    /// Category name
    #[serde(rename = "nombre")]
    pub name: String,
}

/// Service for managing categories
pub struct CategoryService {
    db_pool: Arc<DbPool>,
}

impl CategoryService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    /// List all categories, oldest first.
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> Result<Vec<category::Model>, ServiceError> {
        let db = &*self.db_pool;
        let categories = Category::find()
            .order_by_asc(CategoryColumn::Id)
            .all(db)
            .await?;
        Ok(categories)
    }

    /// Get a category by id.
    #[instrument(skip(self))]
    pub async fn get_category(&self, id: i32) -> Result<Option<category::Model>, ServiceError> {
        let db = &*self.db_pool;
        let category = Category::find_by_id(id).one(db).await?;
        Ok(category)
    }

    /// Create a new category; the store assigns the id.
    #[instrument(skip(self))]
    pub async fn create_category(
        &self,
        input: CategoryInput,
    ) -> Result<category::Model, ServiceError> {
        let db = &*self.db_pool;

        let category = category::ActiveModel {
            name: Set(input.name),
            ..Default::default()
        };
        let created = category.insert(db).await?;

        info!(category_id = created.id, name = %created.name, "category created");
        Ok(created)
    }

    /// Full replace of the mutable fields of an existing category.
    /// Fails with `CategoryNotFound` when the id is absent.
    #[instrument(skip(self))]
    pub async fn update_category(
        &self,
        id: i32,
        input: CategoryInput,
    ) -> Result<category::Model, ServiceError> {
        let db = &*self.db_pool;

        let existing = Category::find_by_id(id)
            .one(db)
            .await?
            .ok_or(ServiceError::CategoryNotFound(id))?;

        let mut category: category::ActiveModel = existing.into();
        category.name = Set(input.name);
        let updated = category.update(db).await?;

        info!(category_id = updated.id, "category updated");
        Ok(updated)
    }

    /// Delete a category by id. Existence is checked first: deleting an
    /// absent id fails with `CategoryNotFound`.
    #[instrument(skip(self))]
    pub async fn delete_category(&self, id: i32) -> Result<(), ServiceError> {
        let db = &*self.db_pool;

        let existing = Category::find_by_id(id)
            .one(db)
            .await?
            .ok_or(ServiceError::CategoryNotFound(id))?;

        existing.delete(db).await?;
        info!(category_id = id, "category deleted");
        Ok(())
    }
}
