use async_trait::async_trait;
use uuid::Uuid;

use crate::customer::application::domain::entities::CustomerProfile;
use crate::customer::application::ports::outgoing::{
    CustomerProfileData, CustomerQuery, CustomerRepository,
};

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct UpsertProfileCommand {
    data: CustomerProfileData,
}

#[derive(Debug, thiserror::Error)]
pub enum UpsertProfileCommandError {
    #[error("First name cannot be empty")]
    EmptyFirstName,

    #[error("Last name cannot be empty")]
    EmptyLastName,

    #[error("Name too long")]
    NameTooLong,
}

impl UpsertProfileCommand {
    pub fn new(data: CustomerProfileData) -> Result<Self, UpsertProfileCommandError> {
        let first_name = data.first_name.trim().to_string();
        let last_name = data.last_name.trim().to_string();

        if first_name.is_empty() {
            return Err(UpsertProfileCommandError::EmptyFirstName);
        }
        if last_name.is_empty() {
            return Err(UpsertProfileCommandError::EmptyLastName);
        }
        if first_name.len() > 100 || last_name.len() > 100 {
            return Err(UpsertProfileCommandError::NameTooLong);
        }

        Ok(Self {
            data: CustomerProfileData {
                first_name,
                last_name,
                ..data
            },
        })
    }

    pub fn into_data(self) -> CustomerProfileData {
        self.data
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

/// Distinguishes create from update so the route can answer 201 or 200.
#[derive(Debug, Clone)]
pub enum UpsertOutcome {
    Created(CustomerProfile),
    Updated(CustomerProfile),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpsertCustomerProfileError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IUpsertCustomerProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        command: UpsertProfileCommand,
    ) -> Result<UpsertOutcome, UpsertCustomerProfileError>;
}

#[derive(Debug, Clone)]
pub struct UpsertCustomerProfileUseCase<Q, R>
where
    Q: CustomerQuery + Send + Sync,
    R: CustomerRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpsertCustomerProfileUseCase<Q, R>
where
    Q: CustomerQuery + Send + Sync,
    R: CustomerRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> IUpsertCustomerProfileUseCase for UpsertCustomerProfileUseCase<Q, R>
where
    Q: CustomerQuery + Send + Sync,
    R: CustomerRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        command: UpsertProfileCommand,
    ) -> Result<UpsertOutcome, UpsertCustomerProfileError> {
        let existing = self
            .query
            .find_by_user(user_id)
            .await
            .map_err(|e| UpsertCustomerProfileError::RepositoryError(e.to_string()))?;

        let data = command.into_data();

        if existing.is_some() {
            let profile = self
                .repository
                .update_profile(user_id, data)
                .await
                .map_err(|e| UpsertCustomerProfileError::RepositoryError(e.to_string()))?;
            Ok(UpsertOutcome::Updated(profile))
        } else {
            let profile = self
                .repository
                .create_profile(user_id, data)
                .await
                .map_err(|e| UpsertCustomerProfileError::RepositoryError(e.to_string()))?;
            Ok(UpsertOutcome::Created(profile))
        }
    }
}
