use async_trait::async_trait;

use crate::modules::product::application::ports::outgoing::product_query::{
    PageRequest, PageResult, ProductListFilter, ProductQueryError, ProductSort, ProductView,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProductsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ProductQueryError> for GetProductsError {
    fn from(err: ProductQueryError) -> Self {
        match err {
            ProductQueryError::DatabaseError(msg) => GetProductsError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait GetProductsUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: ProductListFilter,
        sort: ProductSort,
        page: PageRequest,
    ) -> Result<PageResult<ProductView>, GetProductsError>;
}
