mod create_product;
mod delete_product;
mod get_products;
mod get_single_product;
mod update_product;

pub use create_product::{
    CreateProductCommand, CreateProductCommandError, CreateProductError, CreateProductUseCase,
};
pub use delete_product::{DeleteProductError, DeleteProductUseCase};
pub use get_products::{GetProductsError, GetProductsUseCase};
pub use get_single_product::{GetSingleProductError, GetSingleProductUseCase};
pub use update_product::{
    Requester, UpdateProductCommand, UpdateProductCommandError, UpdateProductError,
    UpdateProductUseCase,
};
