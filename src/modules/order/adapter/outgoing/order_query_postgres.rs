use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::customer::adapter::outgoing::sea_orm_entity as customers;
use crate::modules::order::application::domain::entities::{
    OrderStatus, PaymentStatus, ShippingAddress,
};
use crate::modules::order::application::ports::outgoing::order_query::{
    OrderCustomerView, OrderDetail, OrderItemView, OrderQuery, OrderQueryError, OrderView,
};
use crate::modules::product::adapter::outgoing::sea_orm_entity as products;

use super::sea_orm_entity::{order_items, orders};

fn db_err(e: sea_orm::DbErr) -> OrderQueryError {
    OrderQueryError::DatabaseError(e.to_string())
}

#[derive(Debug, Clone)]
pub struct OrderQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl OrderQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Loads items for a batch of orders and joins product display fields,
    /// one query per table.
    async fn item_views_by_order(
        &self,
        order_ids: Vec<Uuid>,
    ) -> Result<HashMap<Uuid, Vec<OrderItemView>>, OrderQueryError> {
        let mut grouped: HashMap<Uuid, Vec<OrderItemView>> = HashMap::new();
        if order_ids.is_empty() {
            return Ok(grouped);
        }

        let items = order_items::Entity::find()
            .filter(order_items::Column::OrderId.is_in(order_ids))
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        let product_ids: Vec<Uuid> = items.iter().map(|item| item.product_id).collect();
        let mut product_info: HashMap<Uuid, (String, Option<String>)> = HashMap::new();
        if !product_ids.is_empty() {
            let found = products::Entity::find()
                .filter(products::Column::Id.is_in(product_ids))
                .all(&*self.db)
                .await
                .map_err(db_err)?;
            for product in found {
                product_info.insert(product.id, (product.name, product.image));
            }
        }

        for item in items {
            let (product_name, product_image) = product_info
                .get(&item.product_id)
                .cloned()
                .unwrap_or_else(|| ("(deleted product)".to_string(), None));

            grouped.entry(item.order_id).or_default().push(OrderItemView {
                id: item.id,
                product_id: item.product_id,
                product_name,
                product_image,
                price: item.price,
                quantity: item.quantity,
                subtotal: item.subtotal,
            });
        }

        Ok(grouped)
    }

    fn to_view(order: &orders::Model, items: Vec<OrderItemView>) -> OrderView {
        OrderView {
            id: order.id,
            order_number: order.order_number.clone(),
            status: OrderStatus::parse(&order.status),
            total_price: order.total_price,
            payment_method: order.payment_method.clone(),
            payment_status: PaymentStatus::parse(&order.payment_status),
            is_paid: order.is_paid,
            is_delivered: order.is_delivered,
            items,
            created_at: order.created_at.into(),
            updated_at: order.updated_at.into(),
        }
    }
}

#[async_trait]
impl OrderQuery for OrderQueryPostgres {
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<OrderView>, OrderQueryError> {
        let customer = customers::Entity::find()
            .filter(customers::Column::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(db_err)?
            .ok_or(OrderQueryError::CustomerProfileNotFound)?;

        let order_rows = orders::Entity::find()
            .filter(orders::Column::CustomerId.eq(customer.id))
            .order_by_desc(orders::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        let mut items_by_order = self
            .item_views_by_order(order_rows.iter().map(|o| o.id).collect())
            .await?;

        Ok(order_rows
            .iter()
            .map(|order| {
                let items = items_by_order.remove(&order.id).unwrap_or_default();
                Self::to_view(order, items)
            })
            .collect())
    }

    async fn get_by_id(
        &self,
        user_id: Uuid,
        order_id: Uuid,
    ) -> Result<Option<OrderDetail>, OrderQueryError> {
        let found = orders::Entity::find_by_id(order_id)
            .filter(orders::Column::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        let Some(order) = found else {
            return Ok(None);
        };

        let mut items_by_order = self.item_views_by_order(vec![order.id]).await?;
        let items = items_by_order.remove(&order.id).unwrap_or_default();

        let customer = customers::Entity::find_by_id(order.customer_id)
            .one(&*self.db)
            .await
            .map_err(db_err)?
            .map(|c| OrderCustomerView {
                id: c.id,
                first_name: c.first_name,
                last_name: c.last_name,
            });

        let shipping_address = order
            .shipping_address
            .clone()
            .and_then(|json| serde_json::from_value::<ShippingAddress>(json).ok());

        Ok(Some(OrderDetail {
            order: Self::to_view(&order, items),
            customer,
            shipping_address,
        }))
    }
}
