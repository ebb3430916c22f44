use actix_web::{post, web, Responder};
use serde::Deserialize;

use crate::{
    auth::adapter::incoming::web::extractors::auth::AdminUser,
    category::application::ports::incoming::use_cases::{
        CreateCategoryCommand, CreateCategoryCommandError, CreateCategoryError,
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
struct CreateCategoryRequest {
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[post("/api/categories")]
pub async fn create_category_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    payload: web::Json<CreateCategoryRequest>,
) -> impl Responder {
    let command = match CreateCategoryCommand::new(
        payload.name.clone(),
        payload.description.clone(),
        payload.image.clone(),
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.create_category_use_case.execute(command).await {
        Ok(category) => ApiResponse::created(category),
        Err(err) => map_create_category_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: CreateCategoryCommandError) -> actix_web::HttpResponse {
    match err {
        CreateCategoryCommandError::EmptyName => {
            ApiResponse::bad_request("EMPTY_NAME", "Name cannot be empty")
        }
        CreateCategoryCommandError::NameTooLong => {
            ApiResponse::bad_request("NAME_TOO_LONG", "Name must not exceed 100 characters")
        }
    }
}

fn map_create_category_error(err: CreateCategoryError) -> actix_web::HttpResponse {
    match err {
        CreateCategoryError::NameAlreadyTaken => ApiResponse::conflict(
            "CATEGORY_NAME_TAKEN",
            "Category with this name already exists",
        ),
        CreateCategoryError::RepositoryError(_) => ApiResponse::internal_error(),
    }
}
