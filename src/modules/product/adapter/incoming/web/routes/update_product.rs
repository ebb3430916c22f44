use actix_web::{put, web, Responder};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    product::application::ports::incoming::use_cases::{
        Requester, UpdateProductCommand, UpdateProductCommandError, UpdateProductError,
    },
    product::application::ports::outgoing::product_repository::ProductPatch,
    shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub image: Option<String>,
    pub count_in_stock: Option<i32>,
    pub rating: Option<f64>,
    pub category_id: Option<Uuid>,
}

impl UpdateProductRequest {
    fn into_patch(self) -> ProductPatch {
        ProductPatch {
            name: self.name,
            description: self.description,
            price: self.price,
            image: self.image,
            count_in_stock: self.count_in_stock,
            rating: self.rating,
            category_id: self.category_id,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[put("/api/products/{id}")]
pub async fn update_product_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateProductRequest>,
) -> impl Responder {
    let product_id = path.into_inner();

    let command = match UpdateProductCommand::new(payload.into_inner().into_patch()) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    let requester = Requester {
        user_id: user.user_id,
        is_admin: user.role.is_admin(),
    };

    match data
        .product
        .update
        .execute(requester, product_id, command)
        .await
    {
        Ok(product) => ApiResponse::success(product),
        Err(err) => map_update_product_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: UpdateProductCommandError) -> actix_web::HttpResponse {
    match err {
        UpdateProductCommandError::EmptyName => {
            ApiResponse::bad_request("EMPTY_NAME", "Name cannot be empty")
        }
        UpdateProductCommandError::NameTooLong => {
            ApiResponse::bad_request("NAME_TOO_LONG", "Name must not exceed 200 characters")
        }
        UpdateProductCommandError::NegativePrice => {
            ApiResponse::bad_request("NEGATIVE_PRICE", "Price cannot be negative")
        }
        UpdateProductCommandError::NegativeStock => {
            ApiResponse::bad_request("NEGATIVE_STOCK", "Stock cannot be negative")
        }
        UpdateProductCommandError::RatingOutOfRange => {
            ApiResponse::bad_request("RATING_OUT_OF_RANGE", "Rating must be between 0 and 5")
        }
        UpdateProductCommandError::EmptyPatch => {
            ApiResponse::bad_request("EMPTY_PATCH", "Nothing to update")
        }
    }
}

fn map_update_product_error(err: UpdateProductError) -> actix_web::HttpResponse {
    match err {
        UpdateProductError::ProductNotFound => {
            ApiResponse::not_found("PRODUCT_NOT_FOUND", "Product not found")
        }
        UpdateProductError::CategoryNotFound => {
            ApiResponse::not_found("CATEGORY_NOT_FOUND", "Category not found")
        }
        UpdateProductError::Forbidden => {
            ApiResponse::forbidden("NOT_PRODUCT_OWNER", "You do not own this product")
        }
        UpdateProductError::RepositoryError(_) => ApiResponse::internal_error(),
    }
}
