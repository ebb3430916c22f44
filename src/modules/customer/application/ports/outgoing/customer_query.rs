use async_trait::async_trait;
use uuid::Uuid;

use crate::customer::application::domain::entities::CustomerProfile;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CustomerQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CustomerQuery: Send + Sync {
    async fn find_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<CustomerProfile>, CustomerQueryError>;
}
