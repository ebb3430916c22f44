use crate::auth::application::use_cases::register_user::{RegisterRequest, RegisterUserError};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};

/// Registration payload from client
#[derive(Deserialize)]
pub struct RegisterRequestDto {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.register_user_use_case;
    let dto = req.into_inner();

    info!(email = %dto.email, "Registration attempt");

    let request = match RegisterRequest::new(dto.username, dto.email, dto.password) {
        Ok(req) => req,
        Err(e) => {
            return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
        }
    };

    match use_case.execute(request).await {
        Ok(response) => {
            info!(
                user_id = %response.user.id,
                email = %response.user.email,
                "User registered"
            );
            ApiResponse::created(response)
        }

        Err(RegisterUserError::EmailAlreadyExists) => {
            warn!("Registration failed: email already in use");
            ApiResponse::conflict("EMAIL_ALREADY_EXISTS", "Email is already registered")
        }

        Err(RegisterUserError::HashingFailed(ref e)) => {
            error!(error = %e, "Password hashing failed");
            ApiResponse::internal_error()
        }

        Err(RegisterUserError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }

        Err(RegisterUserError::RepositoryError(ref e)) => {
            error!(error = %e, "Database error during registration");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{Role, User, UserPublic};
    use crate::auth::application::use_cases::register_user::{
        IRegisterUserUseCase, RegisterUserResponse,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use uuid::Uuid;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            username: "johndoe".to_string(),
            email: "john@example.com".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            role: Role::User,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[derive(Clone)]
    struct MockRegisterSuccess;

    #[async_trait]
    impl IRegisterUserUseCase for MockRegisterSuccess {
        async fn execute(
            &self,
            _request: RegisterRequest,
        ) -> Result<RegisterUserResponse, RegisterUserError> {
            Ok(RegisterUserResponse {
                user: UserPublic::from(&sample_user()),
                token: "eyJhbGciOiJIUzI1NiJ9.test".to_string(),
            })
        }
    }

    #[derive(Clone)]
    struct MockRegisterEmailTaken;

    #[async_trait]
    impl IRegisterUserUseCase for MockRegisterEmailTaken {
        async fn execute(
            &self,
            _request: RegisterRequest,
        ) -> Result<RegisterUserResponse, RegisterUserError> {
            Err(RegisterUserError::EmailAlreadyExists)
        }
    }

    #[derive(Clone)]
    struct MockRegisterRepoError;

    #[async_trait]
    impl IRegisterUserUseCase for MockRegisterRepoError {
        async fn execute(
            &self,
            _request: RegisterRequest,
        ) -> Result<RegisterUserResponse, RegisterUserError> {
            Err(RegisterUserError::RepositoryError(
                "connection refused".to_string(),
            ))
        }
    }

    fn valid_register_json() -> serde_json::Value {
        serde_json::json!({
            "username": "johndoe",
            "email": "john@example.com",
            "password": "SecurePass123!"
        })
    }

    #[actix_web::test]
    async fn test_register_user_success() {
        let app_state = TestAppStateBuilder::default()
            .with_register_user(MockRegisterSuccess)
            .build();

        let app = test::init_service(App::new().app_data(app_state).service(register_user_handler))
            .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(&valid_register_json())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert!(body["data"]["token"].is_string());
        assert_eq!(body["data"]["user"]["username"], "johndoe");
        assert_eq!(body["data"]["user"]["email"], "john@example.com");
        assert_eq!(body["data"]["user"]["role"], "user");
        assert!(body["data"]["user"].get("password_hash").is_none());
    }

    #[actix_web::test]
    async fn test_register_user_email_conflict() {
        let app_state = TestAppStateBuilder::default()
            .with_register_user(MockRegisterEmailTaken)
            .build();

        let app = test::init_service(App::new().app_data(app_state).service(register_user_handler))
            .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(&valid_register_json())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 409);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "EMAIL_ALREADY_EXISTS");
        assert!(body.get("data").is_none());
    }

    #[actix_web::test]
    async fn test_register_user_repository_error() {
        let app_state = TestAppStateBuilder::default()
            .with_register_user(MockRegisterRepoError)
            .build();

        let app = test::init_service(App::new().app_data(app_state).service(register_user_handler))
            .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(&valid_register_json())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 500);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }

    #[actix_web::test]
    async fn test_register_user_rejects_short_password() {
        let app_state = TestAppStateBuilder::default()
            .with_register_user(MockRegisterSuccess)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(crate::shared::api::custom_json_config())
                .service(register_user_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(&serde_json::json!({
                "username": "johndoe",
                "email": "john@example.com",
                "password": "short"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_register_user_rejects_invalid_email() {
        let app_state = TestAppStateBuilder::default()
            .with_register_user(MockRegisterSuccess)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(crate::shared::api::custom_json_config())
                .service(register_user_handler),
        )
        .await;

        for email in ["notanemail", "missing@", "@nodomain.com", ""] {
            let req = test::TestRequest::post()
                .uri("/api/auth/register")
                .set_json(&serde_json::json!({
                    "username": "johndoe",
                    "email": email,
                    "password": "SecurePass123!"
                }))
                .to_request();

            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 400, "Should reject email: {}", email);
        }
    }

    #[actix_web::test]
    async fn test_register_user_rejects_empty_username() {
        let app_state = TestAppStateBuilder::default()
            .with_register_user(MockRegisterSuccess)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(crate::shared::api::custom_json_config())
                .service(register_user_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(&serde_json::json!({
                "username": "   ",
                "email": "john@example.com",
                "password": "SecurePass123!"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }
}
