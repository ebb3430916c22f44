use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::product::application::ports::{
    incoming::use_cases::{DeleteProductError, DeleteProductUseCase, Requester},
    outgoing::product_repository::{ProductRepository, ProductRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeleteProductService<R>
where
    R: ProductRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteProductService<R>
where
    R: ProductRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteProductUseCase for DeleteProductService<R>
where
    R: ProductRepository + Send + Sync,
{
    async fn execute(
        &self,
        requester: Requester,
        product_id: Uuid,
    ) -> Result<(), DeleteProductError> {
        let record = self
            .repository
            .find_record(product_id)
            .await
            .map_err(|e| DeleteProductError::RepositoryError(e.to_string()))?
            .ok_or(DeleteProductError::ProductNotFound)?;

        if !requester.may_mutate(record.user_id) {
            return Err(DeleteProductError::Forbidden);
        }

        self.repository
            .delete_product(product_id)
            .await
            .map_err(|e| match e {
                ProductRepositoryError::ProductNotFound => DeleteProductError::ProductNotFound,
                other => DeleteProductError::RepositoryError(other.to_string()),
            })
    }
}
