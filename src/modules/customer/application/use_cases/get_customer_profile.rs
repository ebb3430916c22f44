use async_trait::async_trait;
use uuid::Uuid;

use crate::customer::application::domain::entities::CustomerProfile;
use crate::customer::application::ports::outgoing::CustomerQuery;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCustomerProfileError {
    #[error("Customer profile not found")]
    ProfileNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait IGetCustomerProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<CustomerProfile, GetCustomerProfileError>;
}

#[derive(Debug, Clone)]
pub struct GetCustomerProfileUseCase<Q>
where
    Q: CustomerQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetCustomerProfileUseCase<Q>
where
    Q: CustomerQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IGetCustomerProfileUseCase for GetCustomerProfileUseCase<Q>
where
    Q: CustomerQuery + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<CustomerProfile, GetCustomerProfileError> {
        self.query
            .find_by_user(user_id)
            .await
            .map_err(|e| GetCustomerProfileError::QueryError(e.to_string()))?
            .ok_or(GetCustomerProfileError::ProfileNotFound)
    }
}
