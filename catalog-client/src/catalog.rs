use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;

use crate::{
    api::{ApiClient, DEFAULT_TIMEOUT},
    errors::ClientError,
};

/// Category as served by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
}

/// Product as served by the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio", with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub stock: i32,
    #[serde(rename = "categoriaId")]
    pub category_id: i32,
}

/// Form state for creating or replacing a product.
#[derive(Debug, Clone, Serialize)]
pub struct ProductForm {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio", with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub stock: i32,
    #[serde(rename = "categoriaId")]
    pub category_id: i32,
}

impl ProductForm {
    /// Field validation performed before any network call.
    fn validate(&self) -> Result<(), ClientError> {
        if self.name.trim().is_empty() {
            return Err(ClientError::Validation("name is required".into()));
        }
        if self.price <= Decimal::ZERO {
            return Err(ClientError::Validation(
                "price must be greater than zero".into(),
            ));
        }
        if self.stock < 0 {
            return Err(ClientError::Validation("stock cannot be negative".into()));
        }
        if self.category_id <= 0 {
            return Err(ClientError::Validation(
                "a category must be selected".into(),
            ));
        }
        Ok(())
    }
}

fn validate_category_name(name: &str) -> Result<(), ClientError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ClientError::Validation("name is required".into()));
    }
    if trimmed.chars().count() < 3 {
        return Err(ClientError::Validation(
            "name must be at least 3 characters".into(),
        ));
    }
    Ok(())
}

/// Domain operations against the gateway: one thin wrapper per endpoint.
pub struct CatalogClient {
    api: ApiClient,
}

impl CatalogClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        Ok(Self {
            api: ApiClient::new(base_url, timeout)?,
        })
    }

    // Categories

    pub async fn list_categories(&self) -> Result<Vec<Category>, ClientError> {
        self.api.get("/api/categorias").await
    }

    pub async fn get_category(&self, id: i32) -> Result<Category, ClientError> {
        self.api.get(&format!("/api/categorias/{id}")).await
    }

    pub async fn create_category(&self, name: &str) -> Result<Category, ClientError> {
        validate_category_name(name)?;
        self.api
            .post("/api/categorias", &json!({"nombre": name.trim()}))
            .await
    }

    pub async fn update_category(&self, id: i32, name: &str) -> Result<Category, ClientError> {
        validate_category_name(name)?;
        self.api
            .put(&format!("/api/categorias/{id}"), &json!({"nombre": name.trim()}))
            .await
    }

    pub async fn delete_category(&self, id: i32) -> Result<(), ClientError> {
        self.api.delete(&format!("/api/categorias/{id}")).await
    }

    // Products

    pub async fn list_products(&self) -> Result<Vec<Product>, ClientError> {
        self.api.get("/api/productos").await
    }

    pub async fn get_product(&self, id: i32) -> Result<Product, ClientError> {
        self.api.get(&format!("/api/productos/{id}")).await
    }

    pub async fn create_product(&self, form: &ProductForm) -> Result<Product, ClientError> {
        form.validate()?;
        self.api.post("/api/productos", form).await
    }

    pub async fn update_product(&self, id: i32, form: &ProductForm) -> Result<Product, ClientError> {
        form.validate()?;
        self.api.put(&format!("/api/productos/{id}"), form).await
    }

    pub async fn delete_product(&self, id: i32) -> Result<(), ClientError> {
        self.api.delete(&format!("/api/productos/{id}")).await
    }

    /// Resolve a product's category through the two-hop lookup.
    pub async fn category_of_product(&self, id: i32) -> Result<Category, ClientError> {
        self.api
            .get(&format!("/api/productos/{id}/categoria"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn valid_form() -> ProductForm {
        ProductForm {
            name: "Laptop".into(),
            price: dec!(1200.50),
            stock: 10,
            category_id: 1,
        }
    }

    // The client under test points at a base URL on which nothing listens:
    // a request slipping past validation would fail with `Http`, not
    // `Validation`, so these tests also prove no network call was attempted.
    fn client() -> CatalogClient {
        CatalogClient::with_timeout("http://127.0.0.1:9", Duration::from_millis(200))
            .expect("client")
    }

    #[tokio::test]
    async fn category_name_must_be_non_blank() {
        let err = client().create_category("   ").await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(msg) if msg.contains("required")));
    }

    #[tokio::test]
    async fn category_name_must_have_three_characters() {
        let err = client().create_category("TV").await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(msg) if msg.contains("3 characters")));

        let err = client().update_category(1, "ab").await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
    }

    #[tokio::test]
    async fn product_price_must_be_positive() {
        let mut form = valid_form();
        form.price = Decimal::ZERO;
        let err = client().create_product(&form).await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(msg) if msg.contains("price")));

        form.price = dec!(-5);
        let err = client().create_product(&form).await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
    }

    #[tokio::test]
    async fn product_stock_cannot_be_negative() {
        let mut form = valid_form();
        form.stock = -1;
        let err = client().create_product(&form).await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(msg) if msg.contains("stock")));
    }

    #[tokio::test]
    async fn product_requires_a_selected_category() {
        let mut form = valid_form();
        form.category_id = 0;
        let err = client().update_product(1, &form).await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(msg) if msg.contains("category")));
    }

    #[tokio::test]
    async fn product_name_must_be_non_blank() {
        let mut form = valid_form();
        form.name = "  ".into();
        let err = client().create_product(&form).await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(msg) if msg.contains("name")));
    }
}
