use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::order::models::ItemSnapshot;
use crate::domain::order::models::Order;

pub mod add_item_to_order;
pub mod create_order;
pub mod delete_order;
pub mod get_order;
pub mod list_orders;
pub mod list_orders_by_user;

/// Order representation with the stored snapshot list decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderData {
    pub order_id: String,
    pub user_id: String,
    pub status: String,
    pub delivery_date: NaiveDate,
    pub items: Vec<ItemSnapshot>,
}

impl From<&Order> for OrderData {
    fn from(order: &Order) -> Self {
        Self {
            order_id: order.id.to_string(),
            user_id: order.user_id.to_string(),
            status: order.status.to_string(),
            delivery_date: order.delivery_date,
            items: order.items.as_slice().to_vec(),
        }
    }
}

/// List payload shared by the order list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderListData {
    pub orders: Vec<OrderData>,
}

impl OrderListData {
    pub fn from_orders(orders: &[Order]) -> Self {
        Self {
            orders: orders.iter().map(OrderData::from).collect(),
        }
    }
}
