use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::product::application::ports::{
    incoming::use_cases::{
        Requester, UpdateProductCommand, UpdateProductError, UpdateProductUseCase,
    },
    outgoing::product_repository::{ProductRecord, ProductRepository, ProductRepositoryError},
};

#[derive(Debug, Clone)]
pub struct UpdateProductService<R>
where
    R: ProductRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateProductService<R>
where
    R: ProductRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateProductUseCase for UpdateProductService<R>
where
    R: ProductRepository + Send + Sync,
{
    async fn execute(
        &self,
        requester: Requester,
        product_id: Uuid,
        command: UpdateProductCommand,
    ) -> Result<ProductRecord, UpdateProductError> {
        let record = self
            .repository
            .find_record(product_id)
            .await
            .map_err(|e| UpdateProductError::RepositoryError(e.to_string()))?
            .ok_or(UpdateProductError::ProductNotFound)?;

        if !requester.may_mutate(record.user_id) {
            return Err(UpdateProductError::Forbidden);
        }

        self.repository
            .update_product(product_id, command.into_patch())
            .await
            .map_err(|e| match e {
                ProductRepositoryError::ProductNotFound => UpdateProductError::ProductNotFound,
                ProductRepositoryError::CategoryNotFound => UpdateProductError::CategoryNotFound,
                other => UpdateProductError::RepositoryError(other.to_string()),
            })
    }
}
