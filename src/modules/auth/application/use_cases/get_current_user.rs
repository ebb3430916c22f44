use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserPublic;
use crate::auth::application::ports::outgoing::UserQuery;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCurrentUserError {
    #[error("User not found")]
    UserNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

/// A valid token can outlive its user row; the decoded subject is
/// re-fetched on every call.
#[async_trait]
pub trait IGetCurrentUserUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<UserPublic, GetCurrentUserError>;
}

#[derive(Debug, Clone)]
pub struct GetCurrentUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetCurrentUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IGetCurrentUserUseCase for GetCurrentUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<UserPublic, GetCurrentUserError> {
        let user = self
            .query
            .find_by_id(user_id)
            .await
            .map_err(|e| GetCurrentUserError::QueryError(e.to_string()))?
            .ok_or(GetCurrentUserError::UserNotFound)?;

        Ok(UserPublic::from(&user))
    }
}
