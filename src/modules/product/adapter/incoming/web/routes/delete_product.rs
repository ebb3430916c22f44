use actix_web::{delete, web, Responder};
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    product::application::ports::incoming::use_cases::{DeleteProductError, Requester},
    shared::api::ApiResponse,
    AppState,
};

#[delete("/api/products/{id}")]
pub async fn delete_product_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let product_id = path.into_inner();

    let requester = Requester {
        user_id: user.user_id,
        is_admin: user.role.is_admin(),
    };

    match data.product.delete.execute(requester, product_id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteProductError::ProductNotFound) => {
            ApiResponse::not_found("PRODUCT_NOT_FOUND", "Product not found")
        }
        Err(DeleteProductError::Forbidden) => {
            ApiResponse::forbidden("NOT_PRODUCT_OWNER", "You do not own this product")
        }
        Err(DeleteProductError::RepositoryError(_)) => ApiResponse::internal_error(),
    }
}
