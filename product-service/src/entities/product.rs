use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Product entity
///
/// The wire format uses Spanish field names (`nombre`, `precio`,
/// `categoriaId`); prices travel as JSON numbers.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Primary key, assigned by the store
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Product name
    #[serde(rename = "nombre")]
    pub name: String,

    /// Unit price
    #[serde(rename = "precio", with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Units on hand
    pub stock: i32,

    /// Reference to a category owned by the category service.
    /// Not validated at write time; resolved lazily on read.
    #[serde(rename = "categoriaId")]
    pub category_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
