use async_trait::async_trait;
use uuid::Uuid;

use crate::category::application::ports::outgoing::CategoryResult;

//
// ──────────────────────────────────────────────────────────
// Update Category Command
// ──────────────────────────────────────────────────────────
//

/// Explicit patch: absent fields stay untouched, present fields are
/// applied verbatim, so an empty description can be set deliberately.
#[derive(Debug, Clone)]
pub struct UpdateCategoryCommand {
    category_id: Uuid,
    name: Option<String>,
    description: Option<String>,
    image: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum UpdateCategoryCommandError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name too long")]
    NameTooLong,

    #[error("Nothing to update")]
    EmptyPatch,
}

impl UpdateCategoryCommand {
    pub fn new(
        category_id: Uuid,
        name: Option<String>,
        description: Option<String>,
        image: Option<String>,
    ) -> Result<Self, UpdateCategoryCommandError> {
        let name = match name {
            Some(n) => {
                let n = n.trim().to_string();
                if n.is_empty() {
                    return Err(UpdateCategoryCommandError::EmptyName);
                }
                if n.len() > 100 {
                    return Err(UpdateCategoryCommandError::NameTooLong);
                }
                Some(n)
            }
            None => None,
        };

        if name.is_none() && description.is_none() && image.is_none() {
            return Err(UpdateCategoryCommandError::EmptyPatch);
        }

        Ok(Self {
            category_id,
            name,
            description,
            image,
        })
    }

    pub fn category_id(&self) -> Uuid {
        self.category_id
    }

    pub fn name(&self) -> Option<&String> {
        self.name.as_ref()
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
pub enum UpdateCategoryError {
    #[error("Category not found")]
    CategoryNotFound,

    #[error("Category name already taken")]
    NameAlreadyTaken,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateCategoryUseCase: Send + Sync {
    async fn execute(
        &self,
        command: UpdateCategoryCommand,
    ) -> Result<CategoryResult, UpdateCategoryError>;
}
