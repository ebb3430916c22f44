use actix_web::{get, web, Responder};

use crate::{
    category::application::ports::incoming::use_cases::GetCategoriesError,
    shared::api::ApiResponse, AppState,
};

#[get("/api/categories")]
pub async fn get_categories_handler(data: web::Data<AppState>) -> impl Responder {
    match data.get_categories_use_case.execute().await {
        Ok(categories) => ApiResponse::success(categories),
        Err(GetCategoriesError::QueryError(_)) => ApiResponse::internal_error(),
    }
}
