pub mod customer_query_postgres;
pub mod customer_repository_postgres;
pub mod sea_orm_entity;
