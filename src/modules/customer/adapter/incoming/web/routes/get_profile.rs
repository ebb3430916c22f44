use actix_web::{get, web, Responder};

use crate::{
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    customer::application::use_cases::get_customer_profile::GetCustomerProfileError,
    shared::api::ApiResponse, AppState,
};

#[get("/api/customers/profile")]
pub async fn get_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .get_customer_profile_use_case
        .execute(user.user_id)
        .await
    {
        Ok(profile) => ApiResponse::success(profile),
        Err(GetCustomerProfileError::ProfileNotFound) => ApiResponse::not_found(
            "CUSTOMER_PROFILE_NOT_FOUND",
            "No customer profile for this account",
        ),
        Err(GetCustomerProfileError::QueryError(_)) => ApiResponse::internal_error(),
    }
}
