use actix_web::web::PathConfig;

use crate::shared::api::ApiResponse;

/// Unparseable path segments (e.g. a malformed UUID) come back as a 400
/// in the standard envelope instead of actix's default 404.
pub fn custom_path_config() -> PathConfig {
    PathConfig::default().error_handler(|err, _req| {
        let detail = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("INVALID_PATH", &detail),
        )
        .into()
    })
}
