use async_trait::async_trait;
use uuid::Uuid;

use crate::order::application::ports::{
    incoming::use_cases::{CancelOrderError, CancelOrderUseCase},
    outgoing::{OrderRecord, OrderRepository, OrderRepositoryError},
};

#[derive(Debug, Clone)]
pub struct CancelOrderService<R>
where
    R: OrderRepository + Send + Sync,
{
    repository: R,
}

impl<R> CancelOrderService<R>
where
    R: OrderRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CancelOrderUseCase for CancelOrderService<R>
where
    R: OrderRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        order_id: Uuid,
    ) -> Result<OrderRecord, CancelOrderError> {
        self.repository
            .cancel_order(user_id, order_id)
            .await
            .map_err(|e| match e {
                OrderRepositoryError::OrderNotFound => CancelOrderError::OrderNotFound,
                OrderRepositoryError::NotCancellable(status) => {
                    CancelOrderError::NotCancellable(status)
                }
                other => CancelOrderError::RepositoryError(other.to_string()),
            })
    }
}
