use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{Role, User, UserPublic};
use crate::auth::application::ports::outgoing::{
    PasswordHasher, TokenProvider, UserQuery, UserRepository, UserRepositoryError,
};
use email_address::EmailAddress;

// ========================= Register Request =========================
/// Validated registration request - can be deserialized directly from JSON
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    username: String,
    email: String,
    password: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterRequestError {
    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Username must not exceed 50 characters")]
    UsernameTooLong,

    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Password must be at least 8 characters")]
    PasswordTooShort,
}

impl RegisterRequest {
    pub fn new(
        username: String,
        email: String,
        password: String,
    ) -> Result<Self, RegisterRequestError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(RegisterRequestError::EmptyUsername);
        }
        if username.len() > 50 {
            return Err(RegisterRequestError::UsernameTooLong);
        }

        let email = email.trim();
        if email.is_empty() {
            return Err(RegisterRequestError::EmptyEmail);
        }
        if !EmailAddress::is_valid(email) {
            return Err(RegisterRequestError::InvalidEmailFormat);
        }

        if password.len() < 8 {
            return Err(RegisterRequestError::PasswordTooShort);
        }

        Ok(Self {
            username: username.to_string(),
            email: email.to_lowercase(),
            password,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// Custom deserialization that validates during parsing
impl<'de> Deserialize<'de> for RegisterRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RegisterRequestHelper {
            username: String,
            email: String,
            password: String,
        }

        let helper = RegisterRequestHelper::deserialize(deserializer)?;
        RegisterRequest::new(helper.username, helper.email, helper.password)
            .map_err(serde::de::Error::custom)
    }
}

// ====================== Register Error =============================
#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("User already exists with this email")]
    EmailAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

// ====================== Register Response ==========================
#[derive(Debug, Clone, Serialize)]
pub struct RegisterUserResponse {
    pub user: UserPublic,
    pub token: String,
}

// ====================== Register Use Case ==========================
#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(&self, request: RegisterRequest)
        -> Result<RegisterUserResponse, RegisterUserError>;
}

#[derive(Clone)]
pub struct RegisterUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q, R> RegisterUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q, R> IRegisterUserUseCase for RegisterUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        request: RegisterRequest,
    ) -> Result<RegisterUserResponse, RegisterUserError> {
        // Check if email already exists
        if let Ok(Some(_)) = self.query.find_by_email(request.email()).await {
            return Err(RegisterUserError::EmailAlreadyExists);
        }

        // Hash password explicitly, before the entity ever exists.
        // Hashing is never left to a persistence hook.
        let password_hash = self
            .password_hasher
            .hash_password(request.password())
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        let user = User {
            id: Uuid::new_v4(),
            username: request.username().to_string(),
            email: request.email().to_string(),
            password_hash,
            role: Role::User,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };

        // Persist; the unique index on email closes the check-then-insert race
        let user = self.repository.create_user(user).await.map_err(|e| match e {
            UserRepositoryError::EmailAlreadyExists => RegisterUserError::EmailAlreadyExists,
            other => RegisterUserError::RepositoryError(other.to_string()),
        })?;

        let token = self
            .token_provider
            .generate_token(user.id, &user.email, user.role)
            .map_err(|e| RegisterUserError::TokenGenerationFailed(e.to_string()))?;

        Ok(RegisterUserResponse {
            user: UserPublic::from(&user),
            token,
        })
    }
}
