use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    QueryFilter, Set, TransactionTrait,
};
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use crate::modules::customer::adapter::outgoing::sea_orm_entity as customers;
use crate::modules::order::application::domain::entities::{OrderStatus, PaymentStatus};
use crate::modules::order::application::ports::outgoing::order_repository::{
    CreateOrderData, OrderRecord, OrderRepository, OrderRepositoryError,
};
use crate::modules::product::adapter::outgoing::sea_orm_entity as products;

use super::sea_orm_entity::{order_items, orders};

fn db_err(e: sea_orm::DbErr) -> OrderRepositoryError {
    OrderRepositoryError::DatabaseError(e.to_string())
}

/// `ORD-<YYYYMMDD>-<5-digit random>`. Collisions are not retried; the
/// unique index on order_number turns one into a database error.
/// A paid order gets refunded on cancellation, anything else is just
/// marked cancelled.
fn payment_status_after_cancel(current: &str) -> PaymentStatus {
    if PaymentStatus::parse(current) == PaymentStatus::Completed {
        PaymentStatus::Refunded
    } else {
        PaymentStatus::Cancelled
    }
}

fn generate_order_number() -> String {
    let suffix: u32 = rand::thread_rng().gen_range(10000..=99999);
    format!("ORD-{}-{}", Utc::now().format("%Y%m%d"), suffix)
}

#[derive(Debug, Clone)]
pub struct OrderRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl OrderRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn create_order_in_txn(
        txn: &DatabaseTransaction,
        data: CreateOrderData,
    ) -> Result<OrderRecord, OrderRepositoryError> {
        // Scoped lookup doubles as the ownership check.
        customers::Entity::find_by_id(data.customer_id)
            .filter(customers::Column::UserId.eq(data.user_id))
            .one(txn)
            .await
            .map_err(db_err)?
            .ok_or(OrderRepositoryError::CustomerNotFound)?;

        // Sequential, in submission order: each decrement is visible to
        // later lines, so a duplicated product id is checked against the
        // already reduced stock.
        let mut priced_lines = Vec::with_capacity(data.lines.len());
        let mut total = Decimal::ZERO;

        for line in &data.lines {
            let product = products::Entity::find_by_id(line.product_id)
                .one(txn)
                .await
                .map_err(db_err)?
                .ok_or(OrderRepositoryError::ProductNotFound(line.product_id))?;

            if product.count_in_stock < line.quantity {
                return Err(OrderRepositoryError::InsufficientStock {
                    product_id: product.id,
                    name: product.name,
                    available: product.count_in_stock,
                    requested: line.quantity,
                });
            }

            let unit_price = product.price;
            let subtotal = unit_price * Decimal::from(line.quantity);
            total += subtotal;

            let remaining = product.count_in_stock - line.quantity;
            let mut active: products::ActiveModel = product.into();
            active.count_in_stock = Set(remaining);
            active.updated_at = Set(Utc::now().into());
            active.update(txn).await.map_err(db_err)?;

            priced_lines.push((line.product_id, line.quantity, unit_price, subtotal));
        }

        let order_id = Uuid::new_v4();
        let shipping_address = match &data.shipping_address {
            Some(address) => Some(serde_json::to_value(address).map_err(|e| {
                OrderRepositoryError::DatabaseError(e.to_string())
            })?),
            None => None,
        };

        let order = orders::ActiveModel {
            id: Set(order_id),
            order_number: Set(generate_order_number()),
            customer_id: Set(data.customer_id),
            user_id: Set(data.user_id),
            total_price: Set(total),
            status: Set(OrderStatus::Pending.as_str().to_string()),
            payment_method: Set(data.payment_method.clone()),
            is_paid: Set(false),
            is_delivered: Set(false),
            shipping_address: Set(shipping_address),
            ..Default::default()
        }
        .insert(txn)
        .await
        .map_err(db_err)?;

        for (product_id, quantity, unit_price, subtotal) in priced_lines {
            order_items::ActiveModel {
                id: Set(Uuid::new_v4()),
                order_id: Set(order_id),
                product_id: Set(product_id),
                quantity: Set(quantity),
                price: Set(unit_price),
                subtotal: Set(subtotal),
                ..Default::default()
            }
            .insert(txn)
            .await
            .map_err(db_err)?;
        }

        Ok(order.to_record())
    }

    async fn cancel_order_in_txn(
        txn: &DatabaseTransaction,
        user_id: Uuid,
        order_id: Uuid,
    ) -> Result<OrderRecord, OrderRepositoryError> {
        let order = orders::Entity::find_by_id(order_id)
            .filter(orders::Column::UserId.eq(user_id))
            .one(txn)
            .await
            .map_err(db_err)?
            .ok_or(OrderRepositoryError::OrderNotFound)?;

        let status = OrderStatus::parse(&order.status);
        if !status.can_cancel() {
            return Err(OrderRepositoryError::NotCancellable(status));
        }

        let items = order_items::Entity::find()
            .filter(order_items::Column::OrderId.eq(order_id))
            .all(txn)
            .await
            .map_err(db_err)?;

        for item in items {
            let product = products::Entity::find_by_id(item.product_id)
                .one(txn)
                .await
                .map_err(db_err)?
                .ok_or(OrderRepositoryError::ProductNotFound(item.product_id))?;

            let restored = product.count_in_stock + item.quantity;
            let mut active: products::ActiveModel = product.into();
            active.count_in_stock = Set(restored);
            active.updated_at = Set(Utc::now().into());
            active.update(txn).await.map_err(db_err)?;
        }

        let next_payment_status = payment_status_after_cancel(&order.payment_status);
        let mut active: orders::ActiveModel = order.into();
        active.status = Set(OrderStatus::Cancelled.as_str().to_string());
        active.payment_status = Set(next_payment_status.as_str().to_string());
        active.updated_at = Set(Utc::now().into());

        let cancelled = active.update(txn).await.map_err(db_err)?;

        Ok(cancelled.to_record())
    }

    async fn finish(
        txn: DatabaseTransaction,
        result: Result<OrderRecord, OrderRepositoryError>,
    ) -> Result<OrderRecord, OrderRepositoryError> {
        match result {
            Ok(record) => {
                txn.commit().await.map_err(db_err)?;
                Ok(record)
            }
            Err(err) => {
                if let Err(rollback_err) = txn.rollback().await {
                    warn!(error = %rollback_err, "order transaction rollback failed");
                }
                Err(err)
            }
        }
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryPostgres {
    async fn create_order(
        &self,
        data: CreateOrderData,
    ) -> Result<OrderRecord, OrderRepositoryError> {
        let txn = self.db.begin().await.map_err(db_err)?;
        let result = Self::create_order_in_txn(&txn, data).await;
        Self::finish(txn, result).await
    }

    async fn cancel_order(
        &self,
        user_id: Uuid,
        order_id: Uuid,
    ) -> Result<OrderRecord, OrderRepositoryError> {
        let txn = self.db.begin().await.map_err(db_err)?;
        let result = Self::cancel_order_in_txn(&txn, user_id, order_id).await;
        Self::finish(txn, result).await
    }
}
