use async_trait::async_trait;
use uuid::Uuid;

use crate::order::application::ports::{
    incoming::use_cases::{GetUserOrdersError, GetUserOrdersUseCase},
    outgoing::{OrderQuery, OrderQueryError, OrderView},
};

#[derive(Debug, Clone)]
pub struct GetUserOrdersService<Q>
where
    Q: OrderQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetUserOrdersService<Q>
where
    Q: OrderQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetUserOrdersUseCase for GetUserOrdersService<Q>
where
    Q: OrderQuery + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<Vec<OrderView>, GetUserOrdersError> {
        self.query.list_for_user(user_id).await.map_err(|e| match e {
            OrderQueryError::CustomerProfileNotFound => GetUserOrdersError::CustomerProfileNotFound,
            OrderQueryError::DatabaseError(msg) => GetUserOrdersError::QueryFailed(msg),
        })
    }
}
