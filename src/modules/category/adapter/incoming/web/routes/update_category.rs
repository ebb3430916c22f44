use actix_web::{put, web, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::auth::AdminUser,
    category::application::ports::incoming::use_cases::{
        UpdateCategoryCommand, UpdateCategoryCommandError, UpdateCategoryError,
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
struct UpdateCategoryRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[put("/api/categories/{category_id}")]
pub async fn update_category_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateCategoryRequest>,
) -> impl Responder {
    let category_id = path.into_inner();

    let command = match UpdateCategoryCommand::new(
        category_id,
        payload.name.clone(),
        payload.description.clone(),
        payload.image.clone(),
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.update_category_use_case.execute(command).await {
        Ok(category) => ApiResponse::success(category),
        Err(err) => map_update_category_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: UpdateCategoryCommandError) -> actix_web::HttpResponse {
    match err {
        UpdateCategoryCommandError::EmptyName => {
            ApiResponse::bad_request("EMPTY_NAME", "Name cannot be empty")
        }
        UpdateCategoryCommandError::NameTooLong => {
            ApiResponse::bad_request("NAME_TOO_LONG", "Name must not exceed 100 characters")
        }
        UpdateCategoryCommandError::EmptyPatch => {
            ApiResponse::bad_request("EMPTY_PATCH", "At least one field must be provided")
        }
    }
}

fn map_update_category_error(err: UpdateCategoryError) -> actix_web::HttpResponse {
    match err {
        UpdateCategoryError::CategoryNotFound => {
            ApiResponse::not_found("CATEGORY_NOT_FOUND", "Category not found")
        }
        UpdateCategoryError::NameAlreadyTaken => ApiResponse::conflict(
            "CATEGORY_NAME_TAKEN",
            "Category with this name already exists",
        ),
        UpdateCategoryError::RepositoryError(_) => ApiResponse::internal_error(),
    }
}
