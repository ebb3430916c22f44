use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::order::application::domain::entities::{OrderStatus, PaymentStatus, ShippingAddress};

/// One requested line of a new order, in submission order.
#[derive(Debug, Clone)]
pub struct OrderLine {
    pub product_id: Uuid,
    pub quantity: i32,
}

#[derive(Debug, Clone)]
pub struct CreateOrderData {
    pub user_id: Uuid,
    pub customer_id: Uuid,
    pub lines: Vec<OrderLine>,
    pub payment_method: Option<String>,
    pub shipping_address: Option<ShippingAddress>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderRecord {
    pub id: Uuid,
    pub order_number: String,
    pub customer_id: Uuid,
    pub user_id: Uuid,
    pub total_price: Decimal,
    pub status: OrderStatus,
    pub payment_method: Option<String>,
    pub payment_status: PaymentStatus,
    pub is_paid: bool,
    pub paid_at: Option<DateTime<Utc>>,
    pub is_delivered: bool,
    pub delivered_at: Option<DateTime<Utc>>,
    pub shipping_address: Option<ShippingAddress>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum OrderRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Order not found")]
    OrderNotFound,

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

    #[error("Cannot cancel order with status {}", .0.as_str())]
    NotCancellable(OrderStatus),
}

/// Write side. Both operations run as one database transaction; any
/// failure leaves stock and order tables untouched.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn create_order(&self, data: CreateOrderData)
        -> Result<OrderRecord, OrderRepositoryError>;

    /// Cancels an order owned by `user_id`, restoring each line's
    /// quantity onto product stock.
    async fn cancel_order(
        &self,
        user_id: Uuid,
        order_id: Uuid,
    ) -> Result<OrderRecord, OrderRepositoryError>;
}
