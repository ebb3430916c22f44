use actix_web::{put, web, Responder};
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    order::application::ports::incoming::use_cases::CancelOrderError, shared::api::ApiResponse,
    AppState,
};

#[put("/api/orders/{id}/cancel")]
pub async fn cancel_order_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let order_id = path.into_inner();

    match data
        .cancel_order_use_case
        .execute(user.user_id, order_id)
        .await
    {
        Ok(order) => ApiResponse::success(order),
        Err(CancelOrderError::OrderNotFound) => {
            ApiResponse::not_found("ORDER_NOT_FOUND", "Order not found")
        }
        Err(err @ CancelOrderError::NotCancellable(_)) => {
            ApiResponse::bad_request("ORDER_NOT_CANCELLABLE", &err.to_string())
        }
        Err(CancelOrderError::RepositoryError(_)) => ApiResponse::internal_error(),
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
        order::application::ports::incoming::use_cases::CancelOrderUseCase,
        order::application::ports::outgoing::OrderRecord,
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
            unimplemented!("Not used in cancel_order tests")
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
    struct MockCancelOrderUseCase {
        result: Result<OrderRecord, CancelOrderError>,
    }

    #[async_trait]
    impl CancelOrderUseCase for MockCancelOrderUseCase {
        async fn execute(
            &self,
            _user_id: Uuid,
            _order_id: Uuid,
        ) -> Result<OrderRecord, CancelOrderError> {
            self.result.clone()
        }
    }

    fn cancelled_record(user_id: Uuid) -> OrderRecord {
        OrderRecord {
            id: Uuid::new_v4(),
            order_number: "ORD-20260830-12345".to_string(),
            customer_id: Uuid::new_v4(),
            user_id,
            total_price: dec!(40.00),
            status: OrderStatus::Cancelled,
            payment_method: None,
            payment_status: PaymentStatus::Cancelled,
            is_paid: false,
            paid_at: None,
            is_delivered: false,
            delivered_at: None,
            shipping_address: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
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
    async fn cancel_pending_order_succeeds() {
        let user_id = Uuid::new_v4();
        let state = TestAppStateBuilder::default()
            .with_cancel_order(MockCancelOrderUseCase {
                result: Ok(cancelled_record(user_id)),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_data(user_id))
                .service(cancel_order_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/orders/{}/cancel", Uuid::new_v4()))
            .insert_header(bearer())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["data"]["status"], "cancelled");
    }

    #[actix_web::test]
    async fn shipped_order_is_rejected() {
        let state = TestAppStateBuilder::default()
            .with_cancel_order(MockCancelOrderUseCase {
                result: Err(CancelOrderError::NotCancellable(OrderStatus::Shipped)),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_data(Uuid::new_v4()))
                .service(cancel_order_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/orders/{}/cancel", Uuid::new_v4()))
            .insert_header(bearer())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "ORDER_NOT_CANCELLABLE");
        assert!(json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("shipped"));
    }

    #[actix_web::test]
    async fn foreign_order_is_not_found() {
        let state = TestAppStateBuilder::default()
            .with_cancel_order(MockCancelOrderUseCase {
                result: Err(CancelOrderError::OrderNotFound),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_data(Uuid::new_v4()))
                .service(cancel_order_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/orders/{}/cancel", Uuid::new_v4()))
            .insert_header(bearer())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn cancel_order_requires_token() {
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_data(Uuid::new_v4()))
                .service(cancel_order_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/orders/{}/cancel", Uuid::new_v4()))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
