use actix_web::web;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::domain::entities::Role;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;

pub fn test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: "test_secret_key_for_testing_only_0123456789".to_string(),
        token_expiry: 3600,
    })
}

/// Shared app_data for routes that authenticate through the bearer token
/// extractor.
pub fn test_token_provider_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(test_jwt_service());
    web::Data::new(provider)
}

/// Returns a ready-to-insert `Authorization` header value.
pub fn bearer_token_for(user_id: Uuid, email: &str, role: Role) -> String {
    let token = test_jwt_service()
        .generate_token(user_id, email, role)
        .expect("test token generation failed");
    format!("Bearer {token}")
}
