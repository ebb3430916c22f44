use async_trait::async_trait;

use crate::category::application::ports::{
    incoming::use_cases::{UpdateCategoryCommand, UpdateCategoryError, UpdateCategoryUseCase},
    outgoing::{CategoryPatch, CategoryRepository, CategoryRepositoryError, CategoryResult},
};

#[derive(Debug, Clone)]
pub struct UpdateCategoryService<R>
where
    R: CategoryRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateCategoryService<R>
where
    R: CategoryRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateCategoryUseCase for UpdateCategoryService<R>
where
    R: CategoryRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: UpdateCategoryCommand,
    ) -> Result<CategoryResult, UpdateCategoryError> {
        let patch = CategoryPatch {
            name: command.name().cloned(),
            description: command.description().cloned(),
            image: command.image().cloned(),
        };

        self.repository
            .update_category(command.category_id(), patch)
            .await
            .map_err(|e| match e {
                CategoryRepositoryError::CategoryNotFound => UpdateCategoryError::CategoryNotFound,
                CategoryRepositoryError::NameAlreadyTaken => UpdateCategoryError::NameAlreadyTaken,
                other => UpdateCategoryError::RepositoryError(other.to_string()),
            })
    }
}
