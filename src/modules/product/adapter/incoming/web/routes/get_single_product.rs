use actix_web::{get, web, Responder};
use uuid::Uuid;

use crate::{
    product::application::ports::incoming::use_cases::GetSingleProductError,
    shared::api::ApiResponse, AppState,
};

#[get("/api/products/{id}")]
pub async fn get_single_product_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let product_id = path.into_inner();

    match data.product.get_single.execute(product_id).await {
        Ok(product) => ApiResponse::success(product),
        Err(GetSingleProductError::ProductNotFound) => {
            ApiResponse::not_found("PRODUCT_NOT_FOUND", "Product not found")
        }
        Err(GetSingleProductError::QueryFailed(_)) => ApiResponse::internal_error(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use rust_decimal_macros::dec;

    use crate::{
        product::application::ports::incoming::use_cases::GetSingleProductUseCase,
        product::application::ports::outgoing::product_query::{CategoryRef, ProductView},
        tests::support::app_state_builder::TestAppStateBuilder,
    };

    struct MockGetSingleProductUseCase {
        result: Result<ProductView, GetSingleProductError>,
    }

    #[async_trait]
    impl GetSingleProductUseCase for MockGetSingleProductUseCase {
        async fn execute(&self, _product_id: Uuid) -> Result<ProductView, GetSingleProductError> {
            self.result.clone()
        }
    }

    fn sample_view() -> ProductView {
        ProductView {
            id: Uuid::new_v4(),
            name: "Laptop".to_string(),
            description: Some("A laptop".to_string()),
            price: dec!(999.99),
            image: None,
            count_in_stock: 10,
            rating: 4.5,
            num_reviews: 12,
            category: Some(CategoryRef {
                id: Uuid::new_v4(),
                name: "Electronics".to_string(),
            }),
            seller: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[actix_web::test]
    async fn get_single_product_success() {
        let state = TestAppStateBuilder::default()
            .with_get_single_product(MockGetSingleProductUseCase {
                result: Ok(sample_view()),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(get_single_product_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/products/{}", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["data"]["name"], "Laptop");
        assert_eq!(json["data"]["category"]["name"], "Electronics");
    }

    #[actix_web::test]
    async fn get_single_product_not_found() {
        let state = TestAppStateBuilder::default()
            .with_get_single_product(MockGetSingleProductUseCase {
                result: Err(GetSingleProductError::ProductNotFound),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(get_single_product_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/products/{}", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "PRODUCT_NOT_FOUND");
    }

    #[actix_web::test]
    async fn get_single_product_invalid_uuid_is_bad_request() {
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(crate::shared::api::custom_path_config())
                .service(get_single_product_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/products/not-a-uuid")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
