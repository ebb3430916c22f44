use async_trait::async_trait;

use crate::category::application::ports::{
    incoming::use_cases::{CreateCategoryCommand, CreateCategoryError, CreateCategoryUseCase},
    outgoing::{
        CategoryRepository, CategoryRepositoryError, CategoryResult, CreateCategoryData,
    },
};

#[derive(Debug, Clone)]
pub struct CreateCategoryService<R>
where
    R: CategoryRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateCategoryService<R>
where
    R: CategoryRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateCategoryUseCase for CreateCategoryService<R>
where
    R: CategoryRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateCategoryCommand,
    ) -> Result<CategoryResult, CreateCategoryError> {
        let data = CreateCategoryData {
            name: command.name().to_string(),
            description: command.description().cloned(),
            image: command.image().cloned(),
        };

        self.repository
            .create_category(data)
            .await
            .map_err(|e| match e {
                CategoryRepositoryError::NameAlreadyTaken => CreateCategoryError::NameAlreadyTaken,
                other => CreateCategoryError::RepositoryError(other.to_string()),
            })
    }
}
