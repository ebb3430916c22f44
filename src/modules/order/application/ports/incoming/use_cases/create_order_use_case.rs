use async_trait::async_trait;
use uuid::Uuid;

use crate::order::application::domain::entities::ShippingAddress;
use crate::order::application::ports::outgoing::order_repository::{OrderLine, OrderRecord};

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct OrderLineInput {
    pub product_id: Uuid,
    pub quantity: i32,
}

#[derive(Debug, Clone)]
pub struct CreateOrderCommand {
    customer_id: Uuid,
    lines: Vec<OrderLine>,
    payment_method: Option<String>,
    shipping_address: Option<ShippingAddress>,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateOrderCommandError {
    #[error("Order must contain at least one item")]
    EmptyOrder,

    #[error("Quantity must be at least 1")]
    InvalidQuantity,
}

impl CreateOrderCommand {
    pub fn new(
        customer_id: Uuid,
        items: Vec<OrderLineInput>,
        payment_method: Option<String>,
        shipping_address: Option<ShippingAddress>,
    ) -> Result<Self, CreateOrderCommandError> {
        if items.is_empty() {
            return Err(CreateOrderCommandError::EmptyOrder);
        }
        if items.iter().any(|item| item.quantity < 1) {
            return Err(CreateOrderCommandError::InvalidQuantity);
        }

        Ok(Self {
            customer_id,
            lines: items
                .into_iter()
                .map(|item| OrderLine {
                    product_id: item.product_id,
                    quantity: item.quantity,
                })
                .collect(),
            payment_method,
            shipping_address,
        })
    }

    pub fn customer_id(&self) -> Uuid {
        self.customer_id
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn into_parts(self) -> (Uuid, Vec<OrderLine>, Option<String>, Option<ShippingAddress>) {
        (
            self.customer_id,
            self.lines,
            self.payment_method,
            self.shipping_address,
        )
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateOrderError {
    #[error("Customer not found")]
    CustomerNotFound,

    #[error("Product {0} not found")]
    ProductNotFound(Uuid),

    #[error("Insufficient stock for {name}: {available} available, {requested} requested")]
    InsufficientStock {
        product_id: Uuid,
        name: String,
        available: i32,
        requested: i32,
    },

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateOrderUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        command: CreateOrderCommand,
    ) -> Result<OrderRecord, CreateOrderError>;
}
