pub mod customer_query;
pub mod customer_repository;

pub use customer_query::{CustomerQuery, CustomerQueryError};
pub use customer_repository::{CustomerProfileData, CustomerRepository, CustomerRepositoryError};
