use async_trait::async_trait;
use uuid::Uuid;

use crate::order::application::ports::{
    incoming::use_cases::{CreateOrderCommand, CreateOrderError, CreateOrderUseCase},
    outgoing::{CreateOrderData, OrderRecord, OrderRepository, OrderRepositoryError},
};

#[derive(Debug, Clone)]
pub struct CreateOrderService<R>
where
    R: OrderRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateOrderService<R>
where
    R: OrderRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateOrderUseCase for CreateOrderService<R>
where
    R: OrderRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        command: CreateOrderCommand,
    ) -> Result<OrderRecord, CreateOrderError> {
        let (customer_id, lines, payment_method, shipping_address) = command.into_parts();

        let data = CreateOrderData {
            user_id,
            customer_id,
            lines,
            payment_method,
            shipping_address,
        };

        self.repository.create_order(data).await.map_err(|e| match e {
            OrderRepositoryError::CustomerNotFound => CreateOrderError::CustomerNotFound,
            OrderRepositoryError::ProductNotFound(id) => CreateOrderError::ProductNotFound(id),
            OrderRepositoryError::InsufficientStock {
                product_id,
                name,
                available,
                requested,
            } => CreateOrderError::InsufficientStock {
                product_id,
                name,
                available,
                requested,
            },
            other => CreateOrderError::RepositoryError(other.to_string()),
        })
    }
}
