use async_trait::async_trait;
use uuid::Uuid;

use crate::customer::application::domain::entities::CustomerProfile;

#[derive(Debug, Clone)]
pub struct CustomerProfileData {
    pub first_name: String,
    pub last_name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CustomerRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Customer profile not found")]
    ProfileNotFound,
}

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn create_profile(
        &self,
        user_id: Uuid,
        data: CustomerProfileData,
    ) -> Result<CustomerProfile, CustomerRepositoryError>;

    /// Replaces every profile field for the given user.
    async fn update_profile(
        &self,
        user_id: Uuid,
        data: CustomerProfileData,
    ) -> Result<CustomerProfile, CustomerRepositoryError>;
}
