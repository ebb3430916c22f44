use async_trait::async_trait;
use uuid::Uuid;

use crate::order::application::ports::outgoing::order_query::OrderView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetUserOrdersError {
    #[error("Customer profile not found")]
    CustomerProfileNotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetUserOrdersUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<Vec<OrderView>, GetUserOrdersError>;
}
