use async_trait::async_trait;
use uuid::Uuid;

use crate::order::application::ports::{
    incoming::use_cases::{GetOrderError, GetOrderUseCase},
    outgoing::{OrderDetail, OrderQuery, OrderQueryError},
};

#[derive(Debug, Clone)]
pub struct GetOrderService<Q>
where
    Q: OrderQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetOrderService<Q>
where
    Q: OrderQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetOrderUseCase for GetOrderService<Q>
where
    Q: OrderQuery + Send + Sync,
{
    async fn execute(&self, user_id: Uuid, order_id: Uuid) -> Result<OrderDetail, GetOrderError> {
        self.query
            .get_by_id(user_id, order_id)
            .await
            .map_err(|e| GetOrderError::QueryFailed(e.to_string()))?
            .ok_or(GetOrderError::OrderNotFound)
    }
}
