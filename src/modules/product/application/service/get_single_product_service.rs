use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::product::application::ports::{
    incoming::use_cases::{GetSingleProductError, GetSingleProductUseCase},
    outgoing::product_query::{ProductQuery, ProductView},
};

#[derive(Debug, Clone)]
pub struct GetSingleProductService<Q>
where
    Q: ProductQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetSingleProductService<Q>
where
    Q: ProductQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleProductUseCase for GetSingleProductService<Q>
where
    Q: ProductQuery + Send + Sync,
{
    async fn execute(&self, product_id: Uuid) -> Result<ProductView, GetSingleProductError> {
        self.query
            .get_by_id(product_id)
            .await
            .map_err(|e| GetSingleProductError::QueryFailed(e.to_string()))?
            .ok_or(GetSingleProductError::ProductNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    use crate::modules::product::application::ports::outgoing::product_query::{
        PageRequest, PageResult, ProductListFilter, ProductQueryError, ProductSort,
    };

    #[derive(Debug, Clone)]
    struct MockProductQuery {
        result: Result<Option<ProductView>, ProductQueryError>,
    }

    #[async_trait]
    impl ProductQuery for MockProductQuery {
        async fn list(
            &self,
            _filter: ProductListFilter,
            _sort: ProductSort,
            _page: PageRequest,
        ) -> Result<PageResult<ProductView>, ProductQueryError> {
            unimplemented!()
        }

        async fn get_by_id(
            &self,
            _product_id: Uuid,
        ) -> Result<Option<ProductView>, ProductQueryError> {
            self.result.clone()
        }
    }

    fn sample_view() -> ProductView {
        ProductView {
            id: Uuid::new_v4(),
            name: "Laptop".to_string(),
            description: None,
            price: dec!(999.99),
            image: None,
            count_in_stock: 3,
            rating: 4.2,
            num_reviews: 7,
            category: None,
            seller: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn returns_product_view() {
        let expected = sample_view();
        let service = GetSingleProductService::new(MockProductQuery {
            result: Ok(Some(expected.clone())),
        });

        let result = service.execute(expected.id).await.unwrap();
        assert_eq!(result.id, expected.id);
    }

    #[tokio::test]
    async fn missing_product_is_not_found() {
        let service = GetSingleProductService::new(MockProductQuery { result: Ok(None) });

        let result = service.execute(Uuid::new_v4()).await;
        assert!(matches!(
            result,
            Err(GetSingleProductError::ProductNotFound)
        ));
    }
}
