pub mod create_category_service;
pub mod delete_category_service;
pub mod get_categories_service;
pub mod update_category_service;
