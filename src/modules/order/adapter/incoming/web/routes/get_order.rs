use actix_web::{get, web, Responder};
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    order::application::ports::incoming::use_cases::GetOrderError, shared::api::ApiResponse,
    AppState,
};

#[get("/api/orders/{id}")]
pub async fn get_order_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let order_id = path.into_inner();

    match data.get_order_use_case.execute(user.user_id, order_id).await {
        Ok(detail) => ApiResponse::success(detail),
        Err(GetOrderError::OrderNotFound) => {
            ApiResponse::not_found("ORDER_NOT_FOUND", "Order not found")
        }
        Err(GetOrderError::QueryFailed(_)) => ApiResponse::internal_error(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App};
    use async_trait::async_trait;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    use crate::{
        auth::application::domain::entities::Role,
        auth::application::ports::outgoing::token_provider::{
            TokenClaims, TokenError, TokenProvider,
        },
        order::application::domain::entities::{OrderStatus, PaymentStatus},
        order::application::ports::incoming::use_cases::GetOrderUseCase,
        order::application::ports::outgoing::{
            OrderCustomerView, OrderDetail, OrderItemView, OrderView,
        },
        tests::support::app_state_builder::TestAppStateBuilder,
    };

    #[derive(Clone)]
    struct StubTokenProvider {
        user_id: Uuid,
    }

    impl TokenProvider for StubTokenProvider {
        fn generate_token(
            &self,
            _user_id: Uuid,
            _email: &str,
            _role: Role,
        ) -> Result<String, TokenError> {
            unimplemented!("Not used in get_order tests")
        }

        fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
            Ok(TokenClaims {
                sub: self.user_id,
                email: "ada@example.com".to_string(),
                role: Role::User,
                exp: 9_999_999_999,
                iat: 0,
            })
        }
    }

    #[derive(Clone)]
    struct MockGetOrderUseCase {
        result: Result<OrderDetail, GetOrderError>,
    }

    #[async_trait]
    impl GetOrderUseCase for MockGetOrderUseCase {
        async fn execute(
            &self,
            _user_id: Uuid,
            _order_id: Uuid,
        ) -> Result<OrderDetail, GetOrderError> {
            self.result.clone()
        }
    }

    fn sample_detail() -> OrderDetail {
        OrderDetail {
            order: OrderView {
                id: Uuid::new_v4(),
                order_number: "ORD-20260830-12345".to_string(),
                status: OrderStatus::Pending,
                total_price: dec!(40.00),
                payment_method: None,
                payment_status: PaymentStatus::Pending,
                is_paid: false,
                is_delivered: false,
                items: vec![OrderItemView {
                    id: Uuid::new_v4(),
                    product_id: Uuid::new_v4(),
                    product_name: "Widget A".to_string(),
                    product_image: None,
                    price: dec!(10.00),
                    quantity: 2,
                    subtotal: dec!(20.00),
                }],
                created_at: chrono::Utc::now(),
                updated_at: chrono::Utc::now(),
            },
            customer: Some(OrderCustomerView {
                id: Uuid::new_v4(),
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
            }),
            shipping_address: None,
        }
    }

    fn token_data(user_id: Uuid) -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
        let provider: Arc<dyn TokenProvider + Send + Sync> =
            Arc::new(StubTokenProvider { user_id });
        web::Data::new(provider)
    }

    fn bearer() -> (&'static str, &'static str) {
        ("Authorization", "Bearer test-token")
    }

    #[actix_web::test]
    async fn get_order_returns_detail() {
        let user_id = Uuid::new_v4();
        let state = TestAppStateBuilder::default()
            .with_get_order(MockGetOrderUseCase {
                result: Ok(sample_detail()),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_data(user_id))
                .service(get_order_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/orders/{}", Uuid::new_v4()))
            .insert_header(bearer())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["data"]["order_number"], "ORD-20260830-12345");
        assert_eq!(json["data"]["items"][0]["product_name"], "Widget A");
        assert_eq!(json["data"]["customer"]["first_name"], "Ada");
    }

    #[actix_web::test]
    async fn foreign_order_is_not_found() {
        let state = TestAppStateBuilder::default()
            .with_get_order(MockGetOrderUseCase {
                result: Err(GetOrderError::OrderNotFound),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_data(Uuid::new_v4()))
                .service(get_order_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/orders/{}", Uuid::new_v4()))
            .insert_header(bearer())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "ORDER_NOT_FOUND");
    }
}
