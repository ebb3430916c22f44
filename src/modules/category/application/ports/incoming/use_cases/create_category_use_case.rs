use async_trait::async_trait;

use crate::category::application::ports::outgoing::CategoryResult;

//
// ──────────────────────────────────────────────────────────
// Create Category Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateCategoryCommand {
    name: String,
    description: Option<String>,
    image: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateCategoryCommandError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name too long")]
    NameTooLong,
}

impl CreateCategoryCommand {
    pub fn new(
        name: String,
        description: Option<String>,
        image: Option<String>,
    ) -> Result<Self, CreateCategoryCommandError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(CreateCategoryCommandError::EmptyName);
        }

        if name.len() > 100 {
            return Err(CreateCategoryCommandError::NameTooLong);
        }

        Ok(Self {
            name: name.to_string(),
            description,
            image,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&String> {
        self.description.as_ref()
    }

    pub fn image(&self) -> Option<&String> {
        self.image.as_ref()
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCategoryError {
    #[error("Category name already taken")]
    NameAlreadyTaken,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateCategoryUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateCategoryCommand,
    ) -> Result<CategoryResult, CreateCategoryError>;
}
