use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::order::application::domain::entities::{OrderStatus, PaymentStatus, ShippingAddress};

//
// ──────────────────────────────────────────────────────────
// Read Models
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize)]
pub struct OrderItemView {
    pub id: Uuid,
    pub product_id: Uuid,
    pub product_name: String,
    pub product_image: Option<String>,
    pub price: Decimal,
    pub quantity: i32,
    pub subtotal: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderView {
    pub id: Uuid,
    pub order_number: String,
    pub status: OrderStatus,
    pub total_price: Decimal,
    pub payment_method: Option<String>,
    pub payment_status: PaymentStatus,
    pub is_paid: bool,
    pub is_delivered: bool,
    pub items: Vec<OrderItemView>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderCustomerView {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
}

/// Detail projection: the order with its customer and shipping address.
#[derive(Debug, Clone, Serialize)]
pub struct OrderDetail {
    #[serde(flatten)]
    pub order: OrderView,
    pub customer: Option<OrderCustomerView>,
    pub shipping_address: Option<ShippingAddress>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum OrderQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Customer profile not found")]
    CustomerProfileNotFound,
}

//
// ──────────────────────────────────────────────────────────
// Port (read side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait OrderQuery: Send + Sync {
    /// Orders of the user's customer profile, newest first. Fails with
    /// `CustomerProfileNotFound` when the user has no profile yet.
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<OrderView>, OrderQueryError>;

    /// Order scoped to the requesting user. `None` covers both a missing
    /// order and one owned by somebody else.
    async fn get_by_id(
        &self,
        user_id: Uuid,
        order_id: Uuid,
    ) -> Result<Option<OrderDetail>, OrderQueryError>;
}
