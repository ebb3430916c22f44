pub mod order_query;
pub mod order_repository;

pub use order_query::{
    OrderCustomerView, OrderDetail, OrderItemView, OrderQuery, OrderQueryError, OrderView,
};
pub use order_repository::{
    CreateOrderData, OrderLine, OrderRecord, OrderRepository, OrderRepositoryError,
};
