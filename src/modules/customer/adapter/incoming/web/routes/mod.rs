mod get_profile;
mod upsert_profile;

pub use get_profile::get_profile_handler;
pub use upsert_profile::upsert_profile_handler;
