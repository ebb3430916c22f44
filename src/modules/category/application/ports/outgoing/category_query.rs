use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct CategoryResult {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Display fields of a product listed under its category.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryProduct {
    pub id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub count_in_stock: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryWithProducts {
    #[serde(flatten)]
    pub category: CategoryResult,
    pub products: Vec<CategoryProduct>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CategoryQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CategoryQuery: Send + Sync {
    async fn get_all(&self) -> Result<Vec<CategoryResult>, CategoryQueryError>;

    async fn find_by_id(
        &self,
        category_id: Uuid,
    ) -> Result<Option<CategoryWithProducts>, CategoryQueryError>;
}
