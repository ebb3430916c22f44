pub mod cancel_order_service;
pub mod create_order_service;
pub mod get_order_service;
pub mod get_user_orders_service;
