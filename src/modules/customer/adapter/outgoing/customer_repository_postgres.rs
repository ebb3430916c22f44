use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::customer::application::domain::entities::CustomerProfile;
use crate::modules::customer::application::ports::outgoing::{
    CustomerProfileData, CustomerRepository, CustomerRepositoryError,
};

use super::sea_orm_entity::{ActiveModel as CustomerActiveModel, Column, Entity as Customers};

#[derive(Debug, Clone)]
pub struct CustomerRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CustomerRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CustomerRepository for CustomerRepositoryPostgres {
    async fn create_profile(
        &self,
        user_id: Uuid,
        data: CustomerProfileData,
    ) -> Result<CustomerProfile, CustomerRepositoryError> {
        let active = CustomerActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            first_name: Set(data.first_name),
            last_name: Set(data.last_name),
            address: Set(data.address),
            city: Set(data.city),
            state: Set(data.state),
            zip_code: Set(data.zip_code),
            country: Set(data.country),
            phone: Set(data.phone),
            ..Default::default()
        };

        let inserted = active
            .insert(&*self.db)
            .await
            .map_err(|e| CustomerRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_domain())
    }

    async fn update_profile(
        &self,
        user_id: Uuid,
        data: CustomerProfileData,
    ) -> Result<CustomerProfile, CustomerRepositoryError> {
        let existing = Customers::find()
            .filter(Column::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(|e| CustomerRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(CustomerRepositoryError::ProfileNotFound)?;

        let mut active: CustomerActiveModel = existing.into();
        active.first_name = Set(data.first_name);
        active.last_name = Set(data.last_name);
        active.address = Set(data.address);
        active.city = Set(data.city);
        active.state = Set(data.state);
        active.zip_code = Set(data.zip_code);
        active.country = Set(data.country);
        active.phone = Set(data.phone);
        active.updated_at = Set(chrono::Utc::now().into());

        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| CustomerRepositoryError::DatabaseError(e.to_string()))?;

        Ok(updated.to_domain())
    }
}
