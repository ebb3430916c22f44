mod create_category;
mod delete_category;
mod get_categories;
mod get_category;
mod update_category;

pub use create_category::create_category_handler;
pub use delete_category::delete_category_handler;
pub use get_categories::get_categories_handler;
pub use get_category::get_category_handler;
pub use update_category::update_category_handler;
