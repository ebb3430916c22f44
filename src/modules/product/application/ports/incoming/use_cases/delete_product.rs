use async_trait::async_trait;
use uuid::Uuid;

use super::update_product::Requester;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteProductError {
    #[error("Product not found")]
    ProductNotFound,

    #[error("Requester is not the product owner")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    async fn execute(
        &self,
        requester: Requester,
        product_id: Uuid,
    ) -> Result<(), DeleteProductError>;
}
