use actix_web::{delete, web, Responder};
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::auth::AdminUser,
    category::application::ports::incoming::use_cases::DeleteCategoryError,
    shared::api::ApiResponse, AppState,
};

#[delete("/api/categories/{category_id}")]
pub async fn delete_category_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let category_id = path.into_inner();

    match data.delete_category_use_case.execute(category_id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => map_delete_category_error(err),
    }
}

fn map_delete_category_error(err: DeleteCategoryError) -> actix_web::HttpResponse {
    match err {
        DeleteCategoryError::CategoryNotFound => {
            ApiResponse::not_found("CATEGORY_NOT_FOUND", "Category not found")
        }
        DeleteCategoryError::CategoryHasProducts(_) => ApiResponse::conflict(
            "CATEGORY_HAS_PRODUCTS",
            "Cannot delete category with associated products",
        ),
        DeleteCategoryError::RepositoryError(_) => ApiResponse::internal_error(),
    }
}
