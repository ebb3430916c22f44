use async_trait::async_trait;

use crate::modules::product::application::ports::{
    incoming::use_cases::{GetProductsError, GetProductsUseCase},
    outgoing::product_query::{
        PageRequest, PageResult, ProductListFilter, ProductQuery, ProductSort, ProductView,
    },
};

#[derive(Debug, Clone)]
pub struct GetProductsService<Q>
where
    Q: ProductQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetProductsService<Q>
where
    Q: ProductQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProductsUseCase for GetProductsService<Q>
where
    Q: ProductQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: ProductListFilter,
        sort: ProductSort,
        page: PageRequest,
    ) -> Result<PageResult<ProductView>, GetProductsError> {
        Ok(self.query.list(filter, sort, page).await?)
    }
}
