pub mod product_query;
pub mod product_repository;
