use actix_web::{get, web, Responder};
use uuid::Uuid;

use crate::{
    category::application::ports::incoming::use_cases::GetCategoryError,
    shared::api::ApiResponse, AppState,
};

#[get("/api/categories/{category_id}")]
pub async fn get_category_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let category_id = path.into_inner();

    match data.get_category_use_case.execute(category_id).await {
        Ok(category) => ApiResponse::success(category),
        Err(GetCategoryError::CategoryNotFound) => {
            ApiResponse::not_found("CATEGORY_NOT_FOUND", "Category not found")
        }
        Err(GetCategoryError::QueryError(_)) => ApiResponse::internal_error(),
    }
}
