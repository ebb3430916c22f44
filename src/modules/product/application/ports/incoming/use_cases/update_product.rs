use async_trait::async_trait;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::modules::product::application::ports::outgoing::product_repository::{
    ProductPatch, ProductRecord,
};

//
// ──────────────────────────────────────────────────────────
// Requester
// ──────────────────────────────────────────────────────────
//

/// Identity performing a product mutation. Admins may mutate any product,
/// everyone else only their own.
#[derive(Debug, Clone, Copy)]
pub struct Requester {
    pub user_id: Uuid,
    pub is_admin: bool,
}

impl Requester {
    pub fn may_mutate(&self, seller_id: Option<Uuid>) -> bool {
        self.is_admin || seller_id == Some(self.user_id)
    }
}

//
// ──────────────────────────────────────────────────────────
// Update Product Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct UpdateProductCommand {
    patch: ProductPatch,
}

#[derive(Debug, thiserror::Error)]
pub enum UpdateProductCommandError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name too long")]
    NameTooLong,

    #[error("Price cannot be negative")]
    NegativePrice,

    #[error("Stock cannot be negative")]
    NegativeStock,

    #[error("Rating must be between 0 and 5")]
    RatingOutOfRange,

    #[error("Nothing to update")]
    EmptyPatch,
}

impl UpdateProductCommand {
    pub fn new(patch: ProductPatch) -> Result<Self, UpdateProductCommandError> {
        let patch = ProductPatch {
            name: match patch.name {
                Some(n) => {
                    let n = n.trim().to_string();
                    if n.is_empty() {
                        return Err(UpdateProductCommandError::EmptyName);
                    }
                    if n.len() > 200 {
                        return Err(UpdateProductCommandError::NameTooLong);
                    }
                    Some(n)
                }
                None => None,
            },
            ..patch
        };

        if let Some(price) = patch.price {
            if price < Decimal::ZERO {
                return Err(UpdateProductCommandError::NegativePrice);
            }
        }
        if let Some(stock) = patch.count_in_stock {
            if stock < 0 {
                return Err(UpdateProductCommandError::NegativeStock);
            }
        }
        if let Some(rating) = patch.rating {
            if !(0.0..=5.0).contains(&rating) {
                return Err(UpdateProductCommandError::RatingOutOfRange);
            }
        }

        if patch.name.is_none()
            && patch.description.is_none()
            && patch.price.is_none()
            && patch.image.is_none()
            && patch.count_in_stock.is_none()
            && patch.rating.is_none()
            && patch.category_id.is_none()
        {
            return Err(UpdateProductCommandError::EmptyPatch);
        }

        Ok(Self { patch })
    }

    pub fn into_patch(self) -> ProductPatch {
        self.patch
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProductError {
    #[error("Product not found")]
    ProductNotFound,

    #[error("Category not found")]
    CategoryNotFound,

    #[error("Requester is not the product owner")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(
        &self,
        requester: Requester,
        product_id: Uuid,
        command: UpdateProductCommand,
    ) -> Result<ProductRecord, UpdateProductError>;
}
