pub mod cancel_order_use_case;
pub mod create_order_use_case;
pub mod get_order_use_case;
pub mod get_user_orders_use_case;

pub use cancel_order_use_case::{CancelOrderError, CancelOrderUseCase};
pub use create_order_use_case::{
    CreateOrderCommand, CreateOrderCommandError, CreateOrderError, CreateOrderUseCase,
    OrderLineInput,
};
pub use get_order_use_case::{GetOrderError, GetOrderUseCase};
pub use get_user_orders_use_case::{GetUserOrdersError, GetUserOrdersUseCase};
