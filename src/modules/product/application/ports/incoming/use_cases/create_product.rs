use async_trait::async_trait;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::modules::product::application::ports::outgoing::product_repository::ProductRecord;

//
// ──────────────────────────────────────────────────────────
// Create Product Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateProductCommand {
    seller_id: Uuid,
    name: String,
    description: Option<String>,
    price: Decimal,
    image: Option<String>,
    count_in_stock: i32,
    rating: Option<f64>,
    category_id: Uuid,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateProductCommandError {
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
}

impl CreateProductCommand {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        seller_id: Uuid,
        name: String,
        description: Option<String>,
        price: Decimal,
        image: Option<String>,
        count_in_stock: i32,
        rating: Option<f64>,
        category_id: Uuid,
    ) -> Result<Self, CreateProductCommandError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(CreateProductCommandError::EmptyName);
        }
        if name.len() > 200 {
            return Err(CreateProductCommandError::NameTooLong);
        }
        if price < Decimal::ZERO {
            return Err(CreateProductCommandError::NegativePrice);
        }
        if count_in_stock < 0 {
            return Err(CreateProductCommandError::NegativeStock);
        }
        if let Some(r) = rating {
            if !(0.0..=5.0).contains(&r) {
                return Err(CreateProductCommandError::RatingOutOfRange);
            }
        }

        Ok(Self {
            seller_id,
            name: name.to_string(),
            description,
            price,
            image,
            count_in_stock,
            rating,
            category_id,
        })
    }

    pub fn seller_id(&self) -> Uuid {
        self.seller_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&String> {
        self.description.as_ref()
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn image(&self) -> Option<&String> {
        self.image.as_ref()
    }

    pub fn count_in_stock(&self) -> i32 {
        self.count_in_stock
    }

    pub fn rating(&self) -> Option<f64> {
        self.rating
    }

    pub fn category_id(&self) -> Uuid {
        self.category_id
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateProductError {
    #[error("Category not found")]
    CategoryNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateProductCommand,
    ) -> Result<ProductRecord, CreateProductError>;
}
