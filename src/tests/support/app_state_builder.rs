use actix_web::web;
use std::sync::Arc;

use crate::auth::application::use_cases::get_current_user::IGetCurrentUserUseCase;
use crate::auth::application::use_cases::login_user::ILoginUserUseCase;
use crate::auth::application::use_cases::register_user::IRegisterUserUseCase;
use crate::category::application::ports::incoming::use_cases::{
    CreateCategoryUseCase, DeleteCategoryUseCase, GetCategoriesUseCase, GetCategoryUseCase,
    UpdateCategoryUseCase,
};
use crate::customer::application::use_cases::get_customer_profile::IGetCustomerProfileUseCase;
use crate::customer::application::use_cases::upsert_customer_profile::IUpsertCustomerProfileUseCase;
use crate::order::application::ports::incoming::use_cases::{
    CancelOrderUseCase, CreateOrderUseCase, GetOrderUseCase, GetUserOrdersUseCase,
};
use crate::product::application::ports::incoming::use_cases::{
    CreateProductUseCase, DeleteProductUseCase, GetProductsUseCase, GetSingleProductUseCase,
    UpdateProductUseCase,
};
use crate::product::application::product_use_cases::ProductUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    register_user: Option<Arc<dyn IRegisterUserUseCase + Send + Sync>>,
    login_user: Option<Arc<dyn ILoginUserUseCase + Send + Sync>>,
    get_current_user: Option<Arc<dyn IGetCurrentUserUseCase + Send + Sync>>,
    create_category: Option<Arc<dyn CreateCategoryUseCase + Send + Sync>>,
    get_categories: Option<Arc<dyn GetCategoriesUseCase + Send + Sync>>,
    get_category: Option<Arc<dyn GetCategoryUseCase + Send + Sync>>,
    update_category: Option<Arc<dyn UpdateCategoryUseCase + Send + Sync>>,
    delete_category: Option<Arc<dyn DeleteCategoryUseCase + Send + Sync>>,
    product: Option<ProductUseCases>,
    get_customer_profile: Option<Arc<dyn IGetCustomerProfileUseCase + Send + Sync>>,
    upsert_customer_profile: Option<Arc<dyn IUpsertCustomerProfileUseCase + Send + Sync>>,
    create_order: Option<Arc<dyn CreateOrderUseCase + Send + Sync>>,
    get_user_orders: Option<Arc<dyn GetUserOrdersUseCase + Send + Sync>>,
    get_order: Option<Arc<dyn GetOrderUseCase + Send + Sync>>,
    cancel_order: Option<Arc<dyn CancelOrderUseCase + Send + Sync>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_user: Some(Arc::new(StubRegisterUserUseCase)),
            login_user: Some(Arc::new(StubLoginUserUseCase)),
            get_current_user: Some(Arc::new(StubGetCurrentUserUseCase)),
            create_category: Some(Arc::new(StubCreateCategoryUseCase)),
            get_categories: Some(Arc::new(StubGetCategoriesUseCase)),
            get_category: Some(Arc::new(StubGetCategoryUseCase)),
            update_category: Some(Arc::new(StubUpdateCategoryUseCase)),
            delete_category: Some(Arc::new(StubDeleteCategoryUseCase)),
            product: Some(ProductUseCases {
                create: Arc::new(StubCreateProductUseCase),
                get_list: Arc::new(StubGetProductsUseCase),
                get_single: Arc::new(StubGetSingleProductUseCase),
                update: Arc::new(StubUpdateProductUseCase),
                delete: Arc::new(StubDeleteProductUseCase),
            }),
            get_customer_profile: Some(Arc::new(StubGetCustomerProfileUseCase)),
            upsert_customer_profile: Some(Arc::new(StubUpsertCustomerProfileUseCase)),
            create_order: Some(Arc::new(StubCreateOrderUseCase)),
            get_user_orders: Some(Arc::new(StubGetUserOrdersUseCase)),
            get_order: Some(Arc::new(StubGetOrderUseCase)),
            cancel_order: Some(Arc::new(StubCancelOrderUseCase)),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_user(
        mut self,
        uc: impl IRegisterUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.register_user = Some(Arc::new(uc));
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login_user = Some(Arc::new(uc));
        self
    }

    pub fn with_get_current_user(
        mut self,
        uc: impl IGetCurrentUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_current_user = Some(Arc::new(uc));
        self
    }

    pub fn with_create_category(
        mut self,
        uc: impl CreateCategoryUseCase + Send + Sync + 'static,
    ) -> Self {
        self.create_category = Some(Arc::new(uc));
        self
    }

    pub fn with_get_categories(
        mut self,
        uc: impl GetCategoriesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_categories = Some(Arc::new(uc));
        self
    }

    pub fn with_get_category(
        mut self,
        uc: impl GetCategoryUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_category = Some(Arc::new(uc));
        self
    }

    pub fn with_update_category(
        mut self,
        uc: impl UpdateCategoryUseCase + Send + Sync + 'static,
    ) -> Self {
        self.update_category = Some(Arc::new(uc));
        self
    }

    pub fn with_delete_category(
        mut self,
        uc: impl DeleteCategoryUseCase + Send + Sync + 'static,
    ) -> Self {
        self.delete_category = Some(Arc::new(uc));
        self
    }

    pub fn with_create_product(
        mut self,
        uc: impl CreateProductUseCase + Send + Sync + 'static,
    ) -> Self {
        let product = self
            .product
            .as_mut()
            .expect("Product use cases must be initialized");

        product.create = Arc::new(uc);
        self
    }

    pub fn with_get_products(
        mut self,
        uc: impl GetProductsUseCase + Send + Sync + 'static,
    ) -> Self {
        let product = self
            .product
            .as_mut()
            .expect("Product use cases must be initialized");

        product.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_product(
        mut self,
        uc: impl GetSingleProductUseCase + Send + Sync + 'static,
    ) -> Self {
        let product = self
            .product
            .as_mut()
            .expect("Product use cases must be initialized");

        product.get_single = Arc::new(uc);
        self
    }

    pub fn with_update_product(
        mut self,
        uc: impl UpdateProductUseCase + Send + Sync + 'static,
    ) -> Self {
        let product = self
            .product
            .as_mut()
            .expect("Product use cases must be initialized");

        product.update = Arc::new(uc);
        self
    }

    pub fn with_delete_product(
        mut self,
        uc: impl DeleteProductUseCase + Send + Sync + 'static,
    ) -> Self {
        let product = self
            .product
            .as_mut()
            .expect("Product use cases must be initialized");

        product.delete = Arc::new(uc);
        self
    }

    pub fn with_get_customer_profile(
        mut self,
        uc: impl IGetCustomerProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_customer_profile = Some(Arc::new(uc));
        self
    }

    pub fn with_upsert_customer_profile(
        mut self,
        uc: impl IUpsertCustomerProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.upsert_customer_profile = Some(Arc::new(uc));
        self
    }

    pub fn with_create_order(mut self, uc: impl CreateOrderUseCase + Send + Sync + 'static) -> Self {
        self.create_order = Some(Arc::new(uc));
        self
    }

    pub fn with_get_user_orders(
        mut self,
        uc: impl GetUserOrdersUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_user_orders = Some(Arc::new(uc));
        self
    }

    pub fn with_get_order(mut self, uc: impl GetOrderUseCase + Send + Sync + 'static) -> Self {
        self.get_order = Some(Arc::new(uc));
        self
    }

    pub fn with_cancel_order(mut self, uc: impl CancelOrderUseCase + Send + Sync + 'static) -> Self {
        self.cancel_order = Some(Arc::new(uc));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_user_use_case: self.register_user.unwrap(),
            login_user_use_case: self.login_user.unwrap(),
            get_current_user_use_case: self.get_current_user.unwrap(),
            create_category_use_case: self.create_category.unwrap(),
            get_categories_use_case: self.get_categories.unwrap(),
            get_category_use_case: self.get_category.unwrap(),
            update_category_use_case: self.update_category.unwrap(),
            delete_category_use_case: self.delete_category.unwrap(),
            product: self.product.unwrap(),
            get_customer_profile_use_case: self.get_customer_profile.unwrap(),
            upsert_customer_profile_use_case: self.upsert_customer_profile.unwrap(),
            create_order_use_case: self.create_order.unwrap(),
            get_user_orders_use_case: self.get_user_orders.unwrap(),
            get_order_use_case: self.get_order.unwrap(),
            cancel_order_use_case: self.cancel_order.unwrap(),
        })
    }
}
