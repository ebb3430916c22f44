use actix_web::{post, web, Responder};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    product::application::ports::incoming::use_cases::{
        CreateProductCommand, CreateProductCommandError, CreateProductError,
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
struct CreateProductRequest {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub image: Option<String>,
    #[serde(default)]
    pub count_in_stock: i32,
    pub rating: Option<f64>,
    pub category_id: Uuid,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[post("/api/products")]
pub async fn create_product_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<CreateProductRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command = match CreateProductCommand::new(
        user.user_id,
        payload.name,
        payload.description,
        payload.price,
        payload.image,
        payload.count_in_stock,
        payload.rating,
        payload.category_id,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.product.create.execute(command).await {
        Ok(product) => ApiResponse::created(product),
        Err(err) => map_create_product_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: CreateProductCommandError) -> actix_web::HttpResponse {
    match err {
        CreateProductCommandError::EmptyName => {
            ApiResponse::bad_request("EMPTY_NAME", "Name cannot be empty")
        }
        CreateProductCommandError::NameTooLong => {
            ApiResponse::bad_request("NAME_TOO_LONG", "Name must not exceed 200 characters")
        }
        CreateProductCommandError::NegativePrice => {
            ApiResponse::bad_request("NEGATIVE_PRICE", "Price cannot be negative")
        }
        CreateProductCommandError::NegativeStock => {
            ApiResponse::bad_request("NEGATIVE_STOCK", "Stock cannot be negative")
        }
        CreateProductCommandError::RatingOutOfRange => {
            ApiResponse::bad_request("RATING_OUT_OF_RANGE", "Rating must be between 0 and 5")
        }
    }
}

fn map_create_product_error(err: CreateProductError) -> actix_web::HttpResponse {
    match err {
        CreateProductError::CategoryNotFound => {
            ApiResponse::not_found("CATEGORY_NOT_FOUND", "Category not found")
        }
        CreateProductError::RepositoryError(_) => ApiResponse::internal_error(),
    }
}
