pub mod modules;
pub use modules::auth;
pub use modules::category;
pub use modules::customer;
pub use modules::order;
pub use modules::product;
pub mod health;
pub mod shared;

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
use crate::product::application::product_use_cases::ProductUseCases;

use actix_web::{web, App, HttpServer};

use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_user_use_case: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub get_current_user_use_case: Arc<dyn IGetCurrentUserUseCase + Send + Sync>,
    pub create_category_use_case: Arc<dyn CreateCategoryUseCase + Send + Sync>,
    pub get_categories_use_case: Arc<dyn GetCategoriesUseCase + Send + Sync>,
    pub get_category_use_case: Arc<dyn GetCategoryUseCase + Send + Sync>,
    pub update_category_use_case: Arc<dyn UpdateCategoryUseCase + Send + Sync>,
    pub delete_category_use_case: Arc<dyn DeleteCategoryUseCase + Send + Sync>,
    pub product: ProductUseCases,
    pub get_customer_profile_use_case: Arc<dyn IGetCustomerProfileUseCase + Send + Sync>,
    pub upsert_customer_profile_use_case: Arc<dyn IUpsertCustomerProfileUseCase + Send + Sync>,
    pub create_order_use_case: Arc<dyn CreateOrderUseCase + Send + Sync>,
    pub get_user_orders_use_case: Arc<dyn GetUserOrdersUseCase + Send + Sync>,
    pub get_order_use_case: Arc<dyn GetOrderUseCase + Send + Sync>,
    pub cancel_order_use_case: Arc<dyn CancelOrderUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
    use crate::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
    use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
    use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
    use crate::auth::application::ports::outgoing::password_hasher::PasswordHasher;
    use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
    use crate::auth::application::use_cases::{
        get_current_user::GetCurrentUserUseCase, login_user::LoginUserUseCase,
        register_user::RegisterUserUseCase,
    };
    use crate::category::adapter::outgoing::category_query_postgres::CategoryQueryPostgres;
    use crate::category::adapter::outgoing::category_repository_postgres::CategoryRepositoryPostgres;
    use crate::category::application::services::{
        create_category_service::CreateCategoryService,
        delete_category_service::DeleteCategoryService,
        get_categories_service::GetCategoriesService,
        update_category_service::UpdateCategoryService,
    };
    use crate::customer::adapter::outgoing::customer_query_postgres::CustomerQueryPostgres;
    use crate::customer::adapter::outgoing::customer_repository_postgres::CustomerRepositoryPostgres;
    use crate::customer::application::use_cases::{
        get_customer_profile::GetCustomerProfileUseCase,
        upsert_customer_profile::UpsertCustomerProfileUseCase,
    };
    use crate::order::adapter::outgoing::order_query_postgres::OrderQueryPostgres;
    use crate::order::adapter::outgoing::order_repository_postgres::OrderRepositoryPostgres;
    use crate::order::application::services::{
        cancel_order_service::CancelOrderService, create_order_service::CreateOrderService,
        get_order_service::GetOrderService, get_user_orders_service::GetUserOrdersService,
    };
    use crate::product::adapter::outgoing::product_query_postgres::ProductQueryPostgres;
    use crate::product::adapter::outgoing::product_repository_postgres::ProductRepositoryPostgres;
    use crate::product::application::service::{
        create_product_service::CreateProductService, delete_product_service::DeleteProductService,
        get_products_service::GetProductsService,
        get_single_product_service::GetSingleProductService,
        update_product_service::UpdateProductService,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    let server_url = format!("{host}:{port}");
    println!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Auth components
    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let password_hasher_arc: Arc<dyn PasswordHasher + Send + Sync> =
        Arc::new(Argon2Hasher::from_env());

    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));

    let register_user_use_case = RegisterUserUseCase::new(
        user_query.clone(),
        user_repo,
        Arc::clone(&password_hasher_arc),
        Arc::clone(&token_provider_arc),
    );
    let login_user_use_case = LoginUserUseCase::new(
        user_query.clone(),
        Arc::clone(&password_hasher_arc),
        Arc::clone(&token_provider_arc),
    );
    let get_current_user_use_case = GetCurrentUserUseCase::new(user_query);

    // Category components
    let category_repo = CategoryRepositoryPostgres::new(Arc::clone(&db_arc));
    let category_query = CategoryQueryPostgres::new(Arc::clone(&db_arc));

    let create_category_use_case = CreateCategoryService::new(category_repo.clone());
    let get_categories_service = GetCategoriesService::new(category_query);
    let update_category_use_case = UpdateCategoryService::new(category_repo.clone());
    let delete_category_use_case = DeleteCategoryService::new(category_repo);

    // Product components
    let product_repo = ProductRepositoryPostgres::new(Arc::clone(&db_arc));
    let product_query = ProductQueryPostgres::new(Arc::clone(&db_arc));

    let product_use_cases = ProductUseCases {
        create: Arc::new(CreateProductService::new(product_repo.clone())),
        get_list: Arc::new(GetProductsService::new(product_query.clone())),
        get_single: Arc::new(GetSingleProductService::new(product_query)),
        update: Arc::new(UpdateProductService::new(product_repo.clone())),
        delete: Arc::new(DeleteProductService::new(product_repo)),
    };

    // Customer components
    let customer_repo = CustomerRepositoryPostgres::new(Arc::clone(&db_arc));
    let customer_query = CustomerQueryPostgres::new(Arc::clone(&db_arc));

    let get_customer_profile_use_case = GetCustomerProfileUseCase::new(customer_query.clone());
    let upsert_customer_profile_use_case =
        UpsertCustomerProfileUseCase::new(customer_query, customer_repo);

    // Order components
    let order_repo = OrderRepositoryPostgres::new(Arc::clone(&db_arc));
    let order_query = OrderQueryPostgres::new(Arc::clone(&db_arc));

    let create_order_use_case = CreateOrderService::new(order_repo.clone());
    let cancel_order_use_case = CancelOrderService::new(order_repo);
    let get_user_orders_use_case = GetUserOrdersService::new(order_query.clone());
    let get_order_use_case = GetOrderService::new(order_query);

    let state = AppState {
        register_user_use_case: Arc::new(register_user_use_case),
        login_user_use_case: Arc::new(login_user_use_case),
        get_current_user_use_case: Arc::new(get_current_user_use_case),
        create_category_use_case: Arc::new(create_category_use_case),
        get_categories_use_case: Arc::new(get_categories_service.clone()),
        get_category_use_case: Arc::new(get_categories_service),
        update_category_use_case: Arc::new(update_category_use_case),
        delete_category_use_case: Arc::new(delete_category_use_case),
        product: product_use_cases,
        get_customer_profile_use_case: Arc::new(get_customer_profile_use_case),
        upsert_customer_profile_use_case: Arc::new(upsert_customer_profile_use_case),
        create_order_use_case: Arc::new(create_order_use_case),
        get_user_orders_use_case: Arc::new(get_user_orders_use_case),
        get_order_use_case: Arc::new(get_order_use_case),
        cancel_order_use_case: Arc::new(cancel_order_use_case),
    };

    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(crate::shared::api::custom_json_config())
            .app_data(crate::shared::api::custom_path_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::get_current_user_handler);
    // Categories
    cfg.service(crate::category::adapter::incoming::web::routes::get_categories_handler);
    cfg.service(crate::category::adapter::incoming::web::routes::get_category_handler);
    cfg.service(crate::category::adapter::incoming::web::routes::create_category_handler);
    cfg.service(crate::category::adapter::incoming::web::routes::update_category_handler);
    cfg.service(crate::category::adapter::incoming::web::routes::delete_category_handler);
    // Products
    cfg.service(crate::product::adapter::incoming::web::routes::get_products_handler);
    cfg.service(crate::product::adapter::incoming::web::routes::get_single_product_handler);
    cfg.service(crate::product::adapter::incoming::web::routes::create_product_handler);
    cfg.service(crate::product::adapter::incoming::web::routes::update_product_handler);
    cfg.service(crate::product::adapter::incoming::web::routes::delete_product_handler);
    // Customers
    cfg.service(crate::customer::adapter::incoming::web::routes::get_profile_handler);
    cfg.service(crate::customer::adapter::incoming::web::routes::upsert_profile_handler);
    // Orders
    cfg.service(crate::order::adapter::incoming::web::routes::create_order_handler);
    cfg.service(crate::order::adapter::incoming::web::routes::get_orders_handler);
    cfg.service(crate::order::adapter::incoming::web::routes::get_order_handler);
    cfg.service(crate::order::adapter::incoming::web::routes::cancel_order_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
