use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::order::application::domain::entities::{
    OrderStatus, PaymentStatus, ShippingAddress,
};
use crate::modules::order::application::ports::outgoing::order_repository::OrderRecord;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    #[sea_orm(unique)]
    pub order_number: String,

    pub customer_id: Uuid,

    pub user_id: Uuid,

    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub total_price: Decimal,

    pub status: String,

    pub payment_method: Option<String>,

    pub payment_status: String,

    pub is_paid: bool,

    pub paid_at: Option<DateTimeWithTimeZone>,

    pub is_delivered: bool,

    pub delivered_at: Option<DateTimeWithTimeZone>,

    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub shipping_address: Option<Json>,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_record(&self) -> OrderRecord {
        OrderRecord {
            id: self.id,
            order_number: self.order_number.clone(),
            customer_id: self.customer_id,
            user_id: self.user_id,
            total_price: self.total_price,
            status: OrderStatus::parse(&self.status),
            payment_method: self.payment_method.clone(),
            payment_status: PaymentStatus::parse(&self.payment_status),
            is_paid: self.is_paid,
            paid_at: self.paid_at.map(Into::into),
            is_delivered: self.is_delivered,
            delivered_at: self.delivered_at.map(Into::into),
            shipping_address: self
                .shipping_address
                .clone()
                .and_then(|json| serde_json::from_value::<ShippingAddress>(json).ok()),
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::order_items::Entity")]
    OrderItems,

    #[sea_orm(
        belongs_to = "crate::modules::customer::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::CustomerId",
        to = "crate::modules::customer::adapter::outgoing::sea_orm_entity::Column::Id"
    )]
    Customer,
}

impl Related<super::order_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
