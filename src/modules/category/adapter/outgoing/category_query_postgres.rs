use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::category::application::ports::outgoing::{
    CategoryProduct, CategoryQuery, CategoryQueryError, CategoryResult, CategoryWithProducts,
};
use crate::modules::product::adapter::outgoing::sea_orm_entity as products;

use super::sea_orm_entity::{Column, Entity as Categories};

#[derive(Debug, Clone)]
pub struct CategoryQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CategoryQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryQuery for CategoryQueryPostgres {
    async fn get_all(&self) -> Result<Vec<CategoryResult>, CategoryQueryError> {
        let rows = Categories::find()
            .order_by_asc(Column::Name)
            .all(&*self.db)
            .await
            .map_err(|e| CategoryQueryError::DatabaseError(e.to_string()))?;

        Ok(rows.iter().map(|m| m.to_query_result()).collect())
    }

    async fn find_by_id(
        &self,
        category_id: Uuid,
    ) -> Result<Option<CategoryWithProducts>, CategoryQueryError> {
        let category = match Categories::find_by_id(category_id)
            .one(&*self.db)
            .await
            .map_err(|e| CategoryQueryError::DatabaseError(e.to_string()))?
        {
            Some(m) => m,
            None => return Ok(None),
        };

        let product_rows = products::Entity::find()
            .filter(products::Column::CategoryId.eq(category_id))
            .order_by_asc(products::Column::Name)
            .all(&*self.db)
            .await
            .map_err(|e| CategoryQueryError::DatabaseError(e.to_string()))?;

        let products = product_rows
            .into_iter()
            .map(|p| CategoryProduct {
                id: p.id,
                name: p.name,
                price: p.price,
                count_in_stock: p.count_in_stock,
            })
            .collect();

        Ok(Some(CategoryWithProducts {
            category: category.to_query_result(),
            products,
        }))
    }
}
