pub mod order_query_postgres;
pub mod order_repository_postgres;
pub mod sea_orm_entity;
