use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::customer::application::domain::entities::CustomerProfile;
use crate::modules::customer::application::ports::outgoing::{CustomerQuery, CustomerQueryError};

use super::sea_orm_entity::{Column, Entity as Customers};

#[derive(Debug, Clone)]
pub struct CustomerQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CustomerQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CustomerQuery for CustomerQueryPostgres {
    async fn find_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<CustomerProfile>, CustomerQueryError> {
        let found = Customers::find()
            .filter(Column::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(|e| CustomerQueryError::DatabaseError(e.to_string()))?;

        Ok(found.map(|m| m.to_domain()))
    }
}
