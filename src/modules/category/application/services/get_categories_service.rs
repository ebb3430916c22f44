use async_trait::async_trait;
use uuid::Uuid;

use crate::category::application::ports::{
    incoming::use_cases::{
        GetCategoriesError, GetCategoriesUseCase, GetCategoryError, GetCategoryUseCase,
    },
    outgoing::{CategoryQuery, CategoryResult, CategoryWithProducts},
};

#[derive(Debug, Clone)]
pub struct GetCategoriesService<Q>
where
    Q: CategoryQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetCategoriesService<Q>
where
    Q: CategoryQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetCategoriesUseCase for GetCategoriesService<Q>
where
    Q: CategoryQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<CategoryResult>, GetCategoriesError> {
        self.query
            .get_all()
            .await
            .map_err(|e| GetCategoriesError::QueryError(e.to_string()))
    }
}

#[async_trait]
impl<Q> GetCategoryUseCase for GetCategoriesService<Q>
where
    Q: CategoryQuery + Send + Sync,
{
    async fn execute(&self, category_id: Uuid) -> Result<CategoryWithProducts, GetCategoryError> {
        self.query
            .find_by_id(category_id)
            .await
            .map_err(|e| GetCategoryError::QueryError(e.to_string()))?
            .ok_or(GetCategoryError::CategoryNotFound)
    }
}
