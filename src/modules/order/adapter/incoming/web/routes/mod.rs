mod cancel_order;
mod create_order;
mod get_order;
mod get_orders;

pub use cancel_order::cancel_order_handler;
pub use create_order::create_order_handler;
pub use get_order::get_order_handler;
pub use get_orders::get_orders_handler;
