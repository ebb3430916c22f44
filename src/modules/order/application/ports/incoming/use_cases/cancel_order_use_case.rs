use async_trait::async_trait;
use uuid::Uuid;

use crate::order::application::domain::entities::OrderStatus;
use crate::order::application::ports::outgoing::order_repository::OrderRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CancelOrderError {
    #[error("Order not found")]
    OrderNotFound,

    #[error("Cannot cancel order with status {}", .0.as_str())]
    NotCancellable(OrderStatus),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CancelOrderUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid, order_id: Uuid)
        -> Result<OrderRecord, CancelOrderError>;
}
