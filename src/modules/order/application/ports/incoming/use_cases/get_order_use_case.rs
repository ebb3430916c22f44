use async_trait::async_trait;
use uuid::Uuid;

use crate::order::application::ports::outgoing::order_query::OrderDetail;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetOrderError {
    #[error("Order not found")]
    OrderNotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetOrderUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid, order_id: Uuid) -> Result<OrderDetail, GetOrderError>;
}
