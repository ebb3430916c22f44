use async_trait::async_trait;
use uuid::Uuid;

use crate::category::application::ports::outgoing::category_query::CategoryResult;

#[derive(Debug, Clone)]
pub struct CreateCategoryData {
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Partial update. Fields left as `None` are not touched.
#[derive(Debug, Clone, Default)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CategoryRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Category not found")]
    CategoryNotFound,

    #[error("Category name already taken")]
    NameAlreadyTaken,

    #[error("Category still has {0} associated products")]
    CategoryHasProducts(u64),
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn create_category(
        &self,
        data: CreateCategoryData,
    ) -> Result<CategoryResult, CategoryRepositoryError>;

    async fn update_category(
        &self,
        category_id: Uuid,
        patch: CategoryPatch,
    ) -> Result<CategoryResult, CategoryRepositoryError>;

    /// Fails with `CategoryHasProducts` while any product references the row.
    async fn delete_category(&self, category_id: Uuid) -> Result<(), CategoryRepositoryError>;
}
