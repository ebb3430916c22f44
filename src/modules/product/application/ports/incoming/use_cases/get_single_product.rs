use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::product::application::ports::outgoing::product_query::ProductView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleProductError {
    #[error("Product not found")]
    ProductNotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetSingleProductUseCase: Send + Sync {
    async fn execute(&self, product_id: Uuid) -> Result<ProductView, GetSingleProductError>;
}
