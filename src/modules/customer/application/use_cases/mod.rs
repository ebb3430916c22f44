pub mod get_customer_profile;
pub mod upsert_customer_profile;
