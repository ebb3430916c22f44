use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HashError {
    #[error("Failed to hash password")]
    HashFailed,

    #[error("Failed to verify password")]
    VerifyFailed,

    #[error("Hashing task failed")]
    TaskFailed,
}

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;

    /// Returns `Ok(false)` on a mismatch; `Err` only for malformed
    /// hashes or runtime failures.
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
