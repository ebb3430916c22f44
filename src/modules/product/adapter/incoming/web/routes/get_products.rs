use actix_web::{get, web, Responder};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    product::application::ports::incoming::use_cases::GetProductsError,
    product::application::ports::outgoing::product_query::{
        PageRequest, ProductListFilter, ProductSort, ProductSortField, SortDirection,
    },
    shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Query Params
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
struct ListProductsParams {
    page: Option<u32>,
    limit: Option<u32>,
    category: Option<Uuid>,
    seller: Option<Uuid>,
    min_price: Option<Decimal>,
    max_price: Option<Decimal>,
    min_rating: Option<f64>,
    search: Option<String>,
    sort_by: Option<String>,
    order: Option<String>,
}

impl ListProductsParams {
    fn page_request(&self) -> PageRequest {
        let defaults = PageRequest::default();
        PageRequest::clamped(
            self.page.unwrap_or(defaults.page),
            self.limit.unwrap_or(defaults.per_page),
        )
    }

    /// Unknown sort fields and directions fall back to the defaults rather
    /// than failing the request.
    fn sort(&self) -> ProductSort {
        let defaults = ProductSort::default();
        ProductSort {
            field: self
                .sort_by
                .as_deref()
                .and_then(ProductSortField::parse)
                .unwrap_or(defaults.field),
            direction: match self.order.as_deref() {
                Some("asc") => SortDirection::Asc,
                Some("desc") => SortDirection::Desc,
                _ => defaults.direction,
            },
        }
    }

    fn filter(&self) -> ProductListFilter {
        ProductListFilter {
            category_id: self.category,
            seller_id: self.seller,
            min_price: self.min_price,
            max_price: self.max_price,
            min_rating: self.min_rating,
            search: self.search.clone(),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[get("/api/products")]
pub async fn get_products_handler(
    data: web::Data<AppState>,
    params: web::Query<ListProductsParams>,
) -> impl Responder {
    let result = data
        .product
        .get_list
        .execute(params.filter(), params.sort(), params.page_request())
        .await;

    match result {
        Ok(page) => ApiResponse::success(page),
        Err(GetProductsError::QueryFailed(_)) => ApiResponse::internal_error(),
    }
}
