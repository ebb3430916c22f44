use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

/// Flat product row, no joins.
#[derive(Debug, Clone, Serialize)]
pub struct ProductRecord {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub image: Option<String>,
    pub count_in_stock: i32,
    pub rating: f64,
    pub num_reviews: i32,
    pub category_id: Uuid,
    pub user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateProductData {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub image: Option<String>,
    pub count_in_stock: i32,
    pub rating: Option<f64>,
    pub category_id: Uuid,
    pub seller_id: Uuid,
}

/// Partial update. A present field is applied verbatim, so price can be
/// patched to zero.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub image: Option<String>,
    pub count_in_stock: Option<i32>,
    pub rating: Option<f64>,
    pub category_id: Option<Uuid>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProductRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Product not found")]
    ProductNotFound,

    #[error("Category not found")]
    CategoryNotFound,
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Fails with `CategoryNotFound` when the referenced category is missing.
    async fn create_product(
        &self,
        data: CreateProductData,
    ) -> Result<ProductRecord, ProductRepositoryError>;

    async fn find_record(
        &self,
        product_id: Uuid,
    ) -> Result<Option<ProductRecord>, ProductRepositoryError>;

    async fn update_product(
        &self,
        product_id: Uuid,
        patch: ProductPatch,
    ) -> Result<ProductRecord, ProductRepositoryError>;

    async fn delete_product(&self, product_id: Uuid) -> Result<(), ProductRepositoryError>;
}
