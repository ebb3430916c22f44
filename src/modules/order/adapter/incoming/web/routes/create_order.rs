use actix_web::{post, web, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    order::application::domain::entities::ShippingAddress,
    order::application::ports::incoming::use_cases::{
        CreateOrderCommand, CreateOrderCommandError, CreateOrderError, OrderLineInput,
    },
    shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
struct OrderItemRequest {
    pub product_id: Uuid,
    pub quantity: i32,
}

#[derive(Debug, Deserialize)]
struct CreateOrderRequest {
    pub customer_id: Uuid,
    pub items: Vec<OrderItemRequest>,
    pub payment_method: Option<String>,
    pub shipping_address: Option<ShippingAddress>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[post("/api/orders")]
pub async fn create_order_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<CreateOrderRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let items = payload
        .items
        .into_iter()
        .map(|item| OrderLineInput {
            product_id: item.product_id,
            quantity: item.quantity,
        })
        .collect();

    let command = match CreateOrderCommand::new(
        payload.customer_id,
        items,
        payload.payment_method,
        payload.shipping_address,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.create_order_use_case.execute(user.user_id, command).await {
        Ok(order) => ApiResponse::created(order),
        Err(err) => map_create_order_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: CreateOrderCommandError) -> actix_web::HttpResponse {
    match err {
        CreateOrderCommandError::EmptyOrder => {
            ApiResponse::bad_request("EMPTY_ORDER", "Order must contain at least one item")
        }
        CreateOrderCommandError::InvalidQuantity => {
            ApiResponse::bad_request("INVALID_QUANTITY", "Quantity must be at least 1")
        }
    }
}

fn map_create_order_error(err: CreateOrderError) -> actix_web::HttpResponse {
    match err {
        CreateOrderError::CustomerNotFound => {
            ApiResponse::not_found("CUSTOMER_NOT_FOUND", "Customer not found")
        }
        CreateOrderError::ProductNotFound(_) => {
            ApiResponse::not_found("PRODUCT_NOT_FOUND", "Product not found")
        }
        CreateOrderError::InsufficientStock { .. } => {
            ApiResponse::bad_request("INSUFFICIENT_STOCK", &err.to_string())
        }
        CreateOrderError::RepositoryError(_) => ApiResponse::internal_error(),
    }
}
