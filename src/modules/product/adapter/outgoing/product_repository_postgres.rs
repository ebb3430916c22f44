use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::category::adapter::outgoing::sea_orm_entity as categories;
use crate::modules::product::application::ports::outgoing::product_repository::{
    CreateProductData, ProductPatch, ProductRecord, ProductRepository, ProductRepositoryError,
};

use super::sea_orm_entity::{ActiveModel as ProductActiveModel, Entity as Products};

#[derive(Debug, Clone)]
pub struct ProductRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProductRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn category_exists(&self, category_id: Uuid) -> Result<bool, ProductRepositoryError> {
        let found = categories::Entity::find_by_id(category_id)
            .one(&*self.db)
            .await
            .map_err(|e| ProductRepositoryError::DatabaseError(e.to_string()))?;
        Ok(found.is_some())
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn create_product(
        &self,
        data: CreateProductData,
    ) -> Result<ProductRecord, ProductRepositoryError> {
        if !self.category_exists(data.category_id).await? {
            return Err(ProductRepositoryError::CategoryNotFound);
        }

        let active = ProductActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            description: Set(data.description),
            price: Set(data.price),
            image: Set(data.image),
            count_in_stock: Set(data.count_in_stock),
            rating: Set(data.rating.unwrap_or(0.0)),
            num_reviews: Set(0),
            category_id: Set(data.category_id),
            user_id: Set(Some(data.seller_id)),
            ..Default::default()
        };

        let inserted = active
            .insert(&*self.db)
            .await
            .map_err(|e| ProductRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_record())
    }

    async fn find_record(
        &self,
        product_id: Uuid,
    ) -> Result<Option<ProductRecord>, ProductRepositoryError> {
        let found = Products::find_by_id(product_id)
            .one(&*self.db)
            .await
            .map_err(|e| ProductRepositoryError::DatabaseError(e.to_string()))?;

        Ok(found.map(|m| m.to_record()))
    }

    async fn update_product(
        &self,
        product_id: Uuid,
        patch: ProductPatch,
    ) -> Result<ProductRecord, ProductRepositoryError> {
        let existing = Products::find_by_id(product_id)
            .one(&*self.db)
            .await
            .map_err(|e| ProductRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(ProductRepositoryError::ProductNotFound)?;

        if let Some(category_id) = patch.category_id {
            if !self.category_exists(category_id).await? {
                return Err(ProductRepositoryError::CategoryNotFound);
            }
        }

        let mut active: ProductActiveModel = existing.into();

        if let Some(name) = patch.name {
            active.name = Set(name);
        }
        if let Some(description) = patch.description {
            active.description = Set(Some(description));
        }
        if let Some(price) = patch.price {
            active.price = Set(price);
        }
        if let Some(image) = patch.image {
            active.image = Set(Some(image));
        }
        if let Some(count_in_stock) = patch.count_in_stock {
            active.count_in_stock = Set(count_in_stock);
        }
        if let Some(rating) = patch.rating {
            active.rating = Set(rating);
        }
        if let Some(category_id) = patch.category_id {
            active.category_id = Set(category_id);
        }
        active.updated_at = Set(chrono::Utc::now().into());

        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| ProductRepositoryError::DatabaseError(e.to_string()))?;

        Ok(updated.to_record())
    }

    async fn delete_product(&self, product_id: Uuid) -> Result<(), ProductRepositoryError> {
        let result = Products::delete_by_id(product_id)
            .exec(&*self.db)
            .await
            .map_err(|e| ProductRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(ProductRepositoryError::ProductNotFound);
        }

        Ok(())
    }
}
