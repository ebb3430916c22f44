pub mod auth;
pub mod category;
pub mod customer;
pub mod order;
pub mod product;
