use std::env;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub token_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load environment variables if available

        let secret_key = env::var("JWT_SECRET").expect("JWT_SECRET must be set");

        // Validate secret key length (HS256 requires at least 32 bytes)
        if secret_key.len() < 32 {
            panic!("JWT_SECRET must be at least 32 characters long for HS256 algorithm");
        }

        let token_expiry = env::var("JWT_EXPIRES_IN")
            .unwrap_or_else(|_| "86400".to_string())
            .parse::<i64>()
            .unwrap_or_else(|_| panic!("Invalid JWT_EXPIRES_IN value"));

        if token_expiry <= 0 {
            panic!("JWT_EXPIRES_IN must be a positive number of seconds");
        }

        Self {
            secret_key,
            token_expiry,
        }
    }
}
