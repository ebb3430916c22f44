use async_trait::async_trait;
use uuid::Uuid;

use crate::category::application::ports::outgoing::{CategoryResult, CategoryWithProducts};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCategoriesError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetCategoriesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<CategoryResult>, GetCategoriesError>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCategoryError {
    #[error("Category not found")]
    CategoryNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetCategoryUseCase: Send + Sync {
    async fn execute(&self, category_id: Uuid) -> Result<CategoryWithProducts, GetCategoryError>;
}
