pub mod get_current_user;
pub mod login_user;
pub mod register_user;
