mod get_current_user;
mod login_user;
mod register_user;

pub use get_current_user::get_current_user_handler;
pub use login_user::login_user_handler;
pub use register_user::register_user_handler;
