use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize)]
pub struct CategoryRef {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SellerRef {
    pub id: Uuid,
    pub username: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductView {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub image: Option<String>,
    pub count_in_stock: i32,
    pub rating: f64,
    pub num_reviews: i32,
    pub category: Option<CategoryRef>,
    pub seller: Option<SellerRef>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct ProductListFilter {
    pub category_id: Option<Uuid>,
    pub seller_id: Option<Uuid>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub min_rating: Option<f64>,
    pub search: Option<String>,
}

/// Whitelisted sort columns. Anything else in the query string falls back
/// to the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ProductSortField {
    Id,
    Name,
    Price,
    Rating,
    CreatedAt,
}

impl ProductSortField {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "id" => Some(Self::Id),
            "name" => Some(Self::Name),
            "price" => Some(Self::Price),
            "rating" => Some(Self::Rating),
            "created_at" | "createdAt" => Some(Self::CreatedAt),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy)]
pub struct ProductSort {
    pub field: ProductSortField,
    pub direction: SortDirection,
}

impl Default for ProductSort {
    fn default() -> Self {
        Self {
            field: ProductSortField::CreatedAt,
            direction: SortDirection::Desc,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 10,
        }
    }
}

impl PageRequest {
    /// Clamps page to 1.. and per_page to 1..=100.
    pub fn clamped(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.clamp(1, 100),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub total_pages: u64,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProductQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (read side, joins categories and users)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProductQuery: Send + Sync {
    async fn list(
        &self,
        filter: ProductListFilter,
        sort: ProductSort,
        page: PageRequest,
    ) -> Result<PageResult<ProductView>, ProductQueryError>;

    async fn get_by_id(&self, product_id: Uuid)
        -> Result<Option<ProductView>, ProductQueryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_field_whitelist() {
        assert_eq!(ProductSortField::parse("price"), Some(ProductSortField::Price));
        assert_eq!(
            ProductSortField::parse("createdAt"),
            Some(ProductSortField::CreatedAt)
        );
        assert_eq!(ProductSortField::parse("password_hash"), None);
        assert_eq!(ProductSortField::parse("id; DROP TABLE products"), None);
    }

    #[test]
    fn page_request_is_clamped() {
        let page = PageRequest::clamped(0, 0);
        assert_eq!(page.page, 1);
        assert_eq!(page.per_page, 1);

        let page = PageRequest::clamped(3, 1000);
        assert_eq!(page.page, 3);
        assert_eq!(page.per_page, 100);
    }
}
