use actix_web::{post, web, Responder};
use serde::Deserialize;

use crate::{
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    customer::application::ports::outgoing::CustomerProfileData,
    customer::application::use_cases::upsert_customer_profile::{
        UpsertCustomerProfileError, UpsertOutcome, UpsertProfileCommand, UpsertProfileCommandError,
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
struct UpsertProfileRequest {
    pub first_name: String,
    pub last_name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
}

impl UpsertProfileRequest {
    fn into_data(self) -> CustomerProfileData {
        CustomerProfileData {
            first_name: self.first_name,
            last_name: self.last_name,
            address: self.address,
            city: self.city,
            state: self.state,
            zip_code: self.zip_code,
            country: self.country,
            phone: self.phone,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[post("/api/customers/profile")]
pub async fn upsert_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<UpsertProfileRequest>,
) -> impl Responder {
    let command = match UpsertProfileCommand::new(payload.into_inner().into_data()) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data
        .upsert_customer_profile_use_case
        .execute(user.user_id, command)
        .await
    {
        Ok(UpsertOutcome::Created(profile)) => ApiResponse::created(profile),
        Ok(UpsertOutcome::Updated(profile)) => ApiResponse::success(profile),
        Err(UpsertCustomerProfileError::RepositoryError(_)) => ApiResponse::internal_error(),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: UpsertProfileCommandError) -> actix_web::HttpResponse {
    match err {
        UpsertProfileCommandError::EmptyFirstName => {
            ApiResponse::bad_request("EMPTY_FIRST_NAME", "First name cannot be empty")
        }
        UpsertProfileCommandError::EmptyLastName => {
            ApiResponse::bad_request("EMPTY_LAST_NAME", "Last name cannot be empty")
        }
        UpsertProfileCommandError::NameTooLong => {
            ApiResponse::bad_request("NAME_TOO_LONG", "Names must not exceed 100 characters")
        }
    }
}
