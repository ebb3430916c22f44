pub mod category_query;
pub mod category_repository;

pub use category_query::{
    CategoryProduct, CategoryQuery, CategoryQueryError, CategoryResult, CategoryWithProducts,
};
pub use category_repository::{
    CategoryPatch, CategoryRepository, CategoryRepositoryError, CreateCategoryData,
};
