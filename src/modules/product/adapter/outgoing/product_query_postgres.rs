use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::{Condition, Expr};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::adapter::outgoing::sea_orm_entity::users;
use crate::modules::category::adapter::outgoing::sea_orm_entity as categories;
use crate::modules::product::application::ports::outgoing::product_query::{
    CategoryRef, PageRequest, PageResult, ProductListFilter, ProductQuery, ProductQueryError,
    ProductSort, ProductSortField, ProductView, SellerRef, SortDirection,
};

use super::sea_orm_entity::{Column, Entity as Products, Model as ProductModel};

#[derive(Debug, Clone)]
pub struct ProductQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProductQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Resolves category and seller names for a batch of product rows with
    /// one query per related table.
    async fn assemble_views(
        &self,
        rows: Vec<ProductModel>,
    ) -> Result<Vec<ProductView>, ProductQueryError> {
        let category_ids: Vec<Uuid> = rows.iter().map(|r| r.category_id).collect();
        let seller_ids: Vec<Uuid> = rows.iter().filter_map(|r| r.user_id).collect();

        let mut category_names: HashMap<Uuid, String> = HashMap::new();
        if !category_ids.is_empty() {
            let found = categories::Entity::find()
                .filter(categories::Column::Id.is_in(category_ids))
                .all(&*self.db)
                .await
                .map_err(|e| ProductQueryError::DatabaseError(e.to_string()))?;
            for category in found {
                category_names.insert(category.id, category.name);
            }
        }

        let mut seller_names: HashMap<Uuid, String> = HashMap::new();
        if !seller_ids.is_empty() {
            let found = users::Entity::find()
                .filter(users::Column::Id.is_in(seller_ids))
                .all(&*self.db)
                .await
                .map_err(|e| ProductQueryError::DatabaseError(e.to_string()))?;
            for user in found {
                seller_names.insert(user.id, user.username);
            }
        }

        let views = rows
            .into_iter()
            .map(|row| {
                let category = category_names.get(&row.category_id).map(|name| CategoryRef {
                    id: row.category_id,
                    name: name.clone(),
                });
                let seller = row.user_id.and_then(|seller_id| {
                    seller_names.get(&seller_id).map(|username| SellerRef {
                        id: seller_id,
                        username: username.clone(),
                    })
                });
                ProductView {
                    id: row.id,
                    name: row.name,
                    description: row.description,
                    price: row.price,
                    image: row.image,
                    count_in_stock: row.count_in_stock,
                    rating: row.rating,
                    num_reviews: row.num_reviews,
                    category,
                    seller,
                    created_at: row.created_at.into(),
                    updated_at: row.updated_at.into(),
                }
            })
            .collect();

        Ok(views)
    }
}

#[async_trait]
impl ProductQuery for ProductQueryPostgres {
    async fn list(
        &self,
        filter: ProductListFilter,
        sort: ProductSort,
        page: PageRequest,
    ) -> Result<PageResult<ProductView>, ProductQueryError> {
        let mut query = Products::find();

        if let Some(category_id) = filter.category_id {
            query = query.filter(Column::CategoryId.eq(category_id));
        }
        if let Some(seller_id) = filter.seller_id {
            query = query.filter(Column::UserId.eq(seller_id));
        }
        if let Some(min_price) = filter.min_price {
            query = query.filter(Column::Price.gte(min_price));
        }
        if let Some(max_price) = filter.max_price {
            query = query.filter(Column::Price.lte(max_price));
        }
        if let Some(min_rating) = filter.min_rating {
            query = query.filter(Column::Rating.gte(min_rating));
        }
        if let Some(search) = filter.search.as_deref() {
            let search_pattern = format!("%{}%", search);
            query = query.filter(
                Condition::any()
                    .add(Expr::col(Column::Name).ilike(&search_pattern))
                    .add(Expr::col(Column::Description).ilike(&search_pattern)),
            );
        }

        query = match (sort.field, sort.direction) {
            (ProductSortField::Id, SortDirection::Asc) => query.order_by_asc(Column::Id),
            (ProductSortField::Id, SortDirection::Desc) => query.order_by_desc(Column::Id),
            (ProductSortField::Name, SortDirection::Asc) => query.order_by_asc(Column::Name),
            (ProductSortField::Name, SortDirection::Desc) => query.order_by_desc(Column::Name),
            (ProductSortField::Price, SortDirection::Asc) => query.order_by_asc(Column::Price),
            (ProductSortField::Price, SortDirection::Desc) => query.order_by_desc(Column::Price),
            (ProductSortField::Rating, SortDirection::Asc) => query.order_by_asc(Column::Rating),
            (ProductSortField::Rating, SortDirection::Desc) => query.order_by_desc(Column::Rating),
            (ProductSortField::CreatedAt, SortDirection::Asc) => {
                query.order_by_asc(Column::CreatedAt)
            }
            (ProductSortField::CreatedAt, SortDirection::Desc) => {
                query.order_by_desc(Column::CreatedAt)
            }
        };

        let total = query
            .clone()
            .count(&*self.db)
            .await
            .map_err(|e| ProductQueryError::DatabaseError(e.to_string()))?;

        let offset = (page.page.saturating_sub(1) as u64) * page.per_page as u64;
        let rows = query
            .offset(offset)
            .limit(page.per_page as u64)
            .all(&*self.db)
            .await
            .map_err(|e| ProductQueryError::DatabaseError(e.to_string()))?;

        let items = self.assemble_views(rows).await?;

        Ok(PageResult {
            items,
            page: page.page,
            per_page: page.per_page,
            total,
            total_pages: total.div_ceil(page.per_page as u64),
        })
    }

    async fn get_by_id(
        &self,
        product_id: Uuid,
    ) -> Result<Option<ProductView>, ProductQueryError> {
        let found = Products::find_by_id(product_id)
            .one(&*self.db)
            .await
            .map_err(|e| ProductQueryError::DatabaseError(e.to_string()))?;

        let Some(row) = found else {
            return Ok(None);
        };

        let mut views = self.assemble_views(vec![row]).await?;
        Ok(views.pop())
    }
}
