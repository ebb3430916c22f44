use async_trait::async_trait;

use crate::modules::product::application::ports::{
    incoming::use_cases::{CreateProductCommand, CreateProductError, CreateProductUseCase},
    outgoing::product_repository::{
        CreateProductData, ProductRecord, ProductRepository, ProductRepositoryError,
    },
};

#[derive(Debug, Clone)]
pub struct CreateProductService<R>
where
    R: ProductRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateProductService<R>
where
    R: ProductRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateProductUseCase for CreateProductService<R>
where
    R: ProductRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateProductCommand,
    ) -> Result<ProductRecord, CreateProductError> {
        let data = CreateProductData {
            name: command.name().to_string(),
            description: command.description().cloned(),
            price: command.price(),
            image: command.image().cloned(),
            count_in_stock: command.count_in_stock(),
            rating: command.rating(),
            category_id: command.category_id(),
            seller_id: command.seller_id(),
        };

        self.repository
            .create_product(data)
            .await
            .map_err(|e| match e {
                ProductRepositoryError::CategoryNotFound => CreateProductError::CategoryNotFound,
                other => CreateProductError::RepositoryError(other.to_string()),
            })
    }
}
