use actix_web::{get, web, Responder};

use crate::{
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    order::application::ports::incoming::use_cases::GetUserOrdersError, shared::api::ApiResponse,
    AppState,
};

#[get("/api/orders")]
pub async fn get_orders_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.get_user_orders_use_case.execute(user.user_id).await {
        Ok(orders) => ApiResponse::success(orders),
        Err(GetUserOrdersError::CustomerProfileNotFound) => ApiResponse::not_found(
            "CUSTOMER_PROFILE_NOT_FOUND",
            "No customer profile for this account",
        ),
        Err(GetUserOrdersError::QueryFailed(_)) => ApiResponse::internal_error(),
    }
}
