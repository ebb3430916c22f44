pub mod create_product_service;
pub mod delete_product_service;
pub mod get_products_service;
pub mod get_single_product_service;
pub mod update_product_service;
