use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Shipping profile, one per user account.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
