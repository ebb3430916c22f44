use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, PaginatorTrait,
    QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::category::application::ports::outgoing::{
    CategoryPatch, CategoryRepository, CategoryRepositoryError, CategoryResult, CreateCategoryData,
};
use crate::modules::product::adapter::outgoing::sea_orm_entity as products;

use super::sea_orm_entity::{ActiveModel as CategoryActiveModel, Entity as Categories};

fn is_unique_violation(err: &sea_orm::DbErr) -> bool {
    let msg = err.to_string();
    msg.contains("23505") || msg.contains("duplicate key") || msg.contains("unique constraint")
}

#[derive(Debug, Clone)]
pub struct CategoryRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CategoryRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for CategoryRepositoryPostgres {
    async fn create_category(
        &self,
        data: CreateCategoryData,
    ) -> Result<CategoryResult, CategoryRepositoryError> {
        let active = CategoryActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            description: Set(data.description),
            image: Set(data.image),
            ..Default::default()
        };

        let inserted = active.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                CategoryRepositoryError::NameAlreadyTaken
            } else {
                CategoryRepositoryError::DatabaseError(e.to_string())
            }
        })?;

        Ok(inserted.to_query_result())
    }

    async fn update_category(
        &self,
        category_id: Uuid,
        patch: CategoryPatch,
    ) -> Result<CategoryResult, CategoryRepositoryError> {
        let existing = Categories::find_by_id(category_id)
            .one(&*self.db)
            .await
            .map_err(|e| CategoryRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(CategoryRepositoryError::CategoryNotFound)?;

        let mut active: CategoryActiveModel = existing.into();

        if let Some(name) = patch.name {
            active.name = Set(name);
        }
        if let Some(description) = patch.description {
            active.description = Set(Some(description));
        }
        if let Some(image) = patch.image {
            active.image = Set(Some(image));
        }
        active.updated_at = Set(chrono::Utc::now().into());

        let updated = active.update(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                CategoryRepositoryError::NameAlreadyTaken
            } else {
                CategoryRepositoryError::DatabaseError(e.to_string())
            }
        })?;

        Ok(updated.to_query_result())
    }

    async fn delete_category(&self, category_id: Uuid) -> Result<(), CategoryRepositoryError> {
        let existing = Categories::find_by_id(category_id)
            .one(&*self.db)
            .await
            .map_err(|e| CategoryRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(CategoryRepositoryError::CategoryNotFound)?;

        let product_count = products::Entity::find()
            .filter(products::Column::CategoryId.eq(category_id))
            .count(&*self.db)
            .await
            .map_err(|e| CategoryRepositoryError::DatabaseError(e.to_string()))?;

        if product_count > 0 {
            return Err(CategoryRepositoryError::CategoryHasProducts(product_count));
        }

        existing
            .delete(&*self.db)
            .await
            .map_err(|e| CategoryRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::sea_orm_entity::Model as CategoryModel;
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value};
    use std::collections::BTreeMap;

    fn sample_model(name: &str) -> CategoryModel {
        CategoryModel {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: Some("test".to_string()),
            image: None,
            created_at: chrono::Utc::now().into(),
            updated_at: chrono::Utc::now().into(),
        }
    }

    fn count_row(n: i64) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([("num_items", Value::BigInt(Some(n)))])
    }

    #[tokio::test]
    async fn create_category_inserts_row() {
        let expected = sample_model("Electronics");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![expected.clone()]])
            .into_connection();

        let repo = CategoryRepositoryPostgres::new(Arc::new(db));

        let result = repo
            .create_category(CreateCategoryData {
                name: "Electronics".to_string(),
                description: Some("test".to_string()),
                image: Some("catalog/electronics.png".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(result.id, expected.id);
        assert_eq!(result.name, "Electronics");
    }

    #[tokio::test]
    async fn create_category_maps_unique_violation() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([sea_orm::DbErr::Custom(
                "duplicate key value violates unique constraint \"categories_name_key\""
                    .to_string(),
            )])
            .into_connection();

        let repo = CategoryRepositoryPostgres::new(Arc::new(db));

        let result = repo
            .create_category(CreateCategoryData {
                name: "Electronics".to_string(),
                description: None,
                image: None,
            })
            .await;

        assert!(matches!(
            result,
            Err(CategoryRepositoryError::NameAlreadyTaken)
        ));
    }

    #[tokio::test]
    async fn update_category_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<CategoryModel>::new()])
            .into_connection();

        let repo = CategoryRepositoryPostgres::new(Arc::new(db));

        let result = repo
            .update_category(Uuid::new_v4(), CategoryPatch::default())
            .await;

        assert!(matches!(
            result,
            Err(CategoryRepositoryError::CategoryNotFound)
        ));
    }

    #[tokio::test]
    async fn update_category_applies_patch() {
        let existing = sample_model("Old name");
        let mut renamed = existing.clone();
        renamed.name = "New name".to_string();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![existing]])
            .append_query_results([vec![renamed]])
            .into_connection();

        let repo = CategoryRepositoryPostgres::new(Arc::new(db));

        let result = repo
            .update_category(
                Uuid::new_v4(),
                CategoryPatch {
                    name: Some("New name".to_string()),
                    description: None,
                    image: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(result.name, "New name");
    }

    #[tokio::test]
    async fn update_category_sets_image() {
        let existing = sample_model("Electronics");
        let mut with_image = existing.clone();
        with_image.image = Some("catalog/electronics.png".to_string());

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![existing]])
            .append_query_results([vec![with_image]])
            .into_connection();

        let repo = CategoryRepositoryPostgres::new(Arc::new(db));

        let result = repo
            .update_category(
                Uuid::new_v4(),
                CategoryPatch {
                    image: Some("catalog/electronics.png".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(result.image.as_deref(), Some("catalog/electronics.png"));
    }

    #[tokio::test]
    async fn delete_category_with_products_is_rejected() {
        let existing = sample_model("Electronics");

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![existing]])
            .append_query_results([vec![count_row(2)]])
            .into_connection();

        let repo = CategoryRepositoryPostgres::new(Arc::new(db));

        let result = repo.delete_category(Uuid::new_v4()).await;
        assert!(matches!(
            result,
            Err(CategoryRepositoryError::CategoryHasProducts(2))
        ));
    }

    #[tokio::test]
    async fn delete_empty_category_succeeds() {
        let existing = sample_model("Electronics");

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![existing]])
            .append_query_results([vec![count_row(0)]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = CategoryRepositoryPostgres::new(Arc::new(db));

        let result = repo.delete_category(Uuid::new_v4()).await;
        assert!(result.is_ok());
    }
}
