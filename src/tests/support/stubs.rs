use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserPublic;
use crate::auth::application::use_cases::get_current_user::{
    GetCurrentUserError, IGetCurrentUserUseCase,
};
use crate::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginError, LoginRequest, LoginUserResponse,
};
use crate::auth::application::use_cases::register_user::{
    IRegisterUserUseCase, RegisterRequest, RegisterUserError, RegisterUserResponse,
};
use crate::category::application::ports::incoming::use_cases::{
    CreateCategoryCommand, CreateCategoryError, CreateCategoryUseCase, DeleteCategoryError,
    DeleteCategoryUseCase, GetCategoriesError, GetCategoriesUseCase, GetCategoryError,
    GetCategoryUseCase, UpdateCategoryCommand, UpdateCategoryError, UpdateCategoryUseCase,
};
use crate::category::application::ports::outgoing::{CategoryResult, CategoryWithProducts};
use crate::customer::application::domain::entities::CustomerProfile;
use crate::customer::application::use_cases::get_customer_profile::{
    GetCustomerProfileError, IGetCustomerProfileUseCase,
};
use crate::customer::application::use_cases::upsert_customer_profile::{
    IUpsertCustomerProfileUseCase, UpsertCustomerProfileError, UpsertOutcome, UpsertProfileCommand,
};
use crate::order::application::ports::incoming::use_cases::{
    CancelOrderError, CancelOrderUseCase, CreateOrderCommand, CreateOrderError, CreateOrderUseCase,
    GetOrderError, GetOrderUseCase, GetUserOrdersError, GetUserOrdersUseCase,
};
use crate::order::application::ports::outgoing::{OrderDetail, OrderRecord, OrderView};
use crate::product::application::ports::incoming::use_cases::{
    CreateProductCommand, CreateProductError, CreateProductUseCase, DeleteProductError,
    DeleteProductUseCase, GetProductsError, GetProductsUseCase, GetSingleProductError,
    GetSingleProductUseCase, Requester, UpdateProductCommand, UpdateProductError,
    UpdateProductUseCase,
};
use crate::product::application::ports::outgoing::product_query::{
    PageRequest, PageResult, ProductListFilter, ProductSort, ProductView,
};
use crate::product::application::ports::outgoing::product_repository::ProductRecord;

#[derive(Default, Clone)]
pub struct StubRegisterUserUseCase;

#[async_trait]
impl IRegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(
        &self,
        _request: RegisterRequest,
    ) -> Result<RegisterUserResponse, RegisterUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetCurrentUserUseCase;

#[async_trait]
impl IGetCurrentUserUseCase for StubGetCurrentUserUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<UserPublic, GetCurrentUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateCategoryUseCase;

#[async_trait]
impl CreateCategoryUseCase for StubCreateCategoryUseCase {
    async fn execute(
        &self,
        _command: CreateCategoryCommand,
    ) -> Result<CategoryResult, CreateCategoryError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetCategoriesUseCase;

#[async_trait]
impl GetCategoriesUseCase for StubGetCategoriesUseCase {
    async fn execute(&self) -> Result<Vec<CategoryResult>, GetCategoriesError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetCategoryUseCase;

#[async_trait]
impl GetCategoryUseCase for StubGetCategoryUseCase {
    async fn execute(&self, _category_id: Uuid) -> Result<CategoryWithProducts, GetCategoryError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateCategoryUseCase;

#[async_trait]
impl UpdateCategoryUseCase for StubUpdateCategoryUseCase {
    async fn execute(
        &self,
        _command: UpdateCategoryCommand,
    ) -> Result<CategoryResult, UpdateCategoryError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteCategoryUseCase;

#[async_trait]
impl DeleteCategoryUseCase for StubDeleteCategoryUseCase {
    async fn execute(&self, _category_id: Uuid) -> Result<(), DeleteCategoryError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateProductUseCase;

#[async_trait]
impl CreateProductUseCase for StubCreateProductUseCase {
    async fn execute(
        &self,
        _command: CreateProductCommand,
    ) -> Result<ProductRecord, CreateProductError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetProductsUseCase;

#[async_trait]
impl GetProductsUseCase for StubGetProductsUseCase {
    async fn execute(
        &self,
        _filter: ProductListFilter,
        _sort: ProductSort,
        _page: PageRequest,
    ) -> Result<PageResult<ProductView>, GetProductsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetSingleProductUseCase;

#[async_trait]
impl GetSingleProductUseCase for StubGetSingleProductUseCase {
    async fn execute(&self, _product_id: Uuid) -> Result<ProductView, GetSingleProductError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateProductUseCase;

#[async_trait]
impl UpdateProductUseCase for StubUpdateProductUseCase {
    async fn execute(
        &self,
        _requester: Requester,
        _product_id: Uuid,
        _command: UpdateProductCommand,
    ) -> Result<ProductRecord, UpdateProductError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteProductUseCase;

#[async_trait]
impl DeleteProductUseCase for StubDeleteProductUseCase {
    async fn execute(
        &self,
        _requester: Requester,
        _product_id: Uuid,
    ) -> Result<(), DeleteProductError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetCustomerProfileUseCase;

#[async_trait]
impl IGetCustomerProfileUseCase for StubGetCustomerProfileUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<CustomerProfile, GetCustomerProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpsertCustomerProfileUseCase;

#[async_trait]
impl IUpsertCustomerProfileUseCase for StubUpsertCustomerProfileUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _command: UpsertProfileCommand,
    ) -> Result<UpsertOutcome, UpsertCustomerProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateOrderUseCase;

#[async_trait]
impl CreateOrderUseCase for StubCreateOrderUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _command: CreateOrderCommand,
    ) -> Result<OrderRecord, CreateOrderError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetUserOrdersUseCase;

#[async_trait]
impl GetUserOrdersUseCase for StubGetUserOrdersUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<Vec<OrderView>, GetUserOrdersError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetOrderUseCase;

#[async_trait]
impl GetOrderUseCase for StubGetOrderUseCase {
    async fn execute(&self, _user_id: Uuid, _order_id: Uuid) -> Result<OrderDetail, GetOrderError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCancelOrderUseCase;

#[async_trait]
impl CancelOrderUseCase for StubCancelOrderUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _order_id: Uuid,
    ) -> Result<OrderRecord, CancelOrderError> {
        unimplemented!("Not used in this test")
    }
}
