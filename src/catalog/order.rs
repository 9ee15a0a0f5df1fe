use serde::{Deserialize, Serialize};
use shopvault_macros::Record;

use super::Seeded;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    #[serde(rename = "Hazırlanıyor")]
    Preparing,
    #[serde(rename = "Kargoda")]
    Shipped,
    #[serde(rename = "Teslim Edildi")]
    Delivered,
    #[serde(rename = "İptal")]
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: u64,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Record)]
#[record(collection = "mv_orders", prefix = "ORD", validate = "check")]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    pub date: String,
    pub items: Vec<OrderItem>,
    pub total: f64,
    #[serde(default)]
    pub status: OrderStatus,
}

impl Order {
    fn check(&self) -> Result<(), String> {
        if self.items.is_empty() {
            return Err("order has no items".into());
        }
        Ok(())
    }

    /// Sum of item prices times quantities.
    pub fn items_total(&self) -> f64 {
        self.items
            .iter()
            .map(|item| item.price * f64::from(item.quantity))
            .sum()
    }
}

impl Seeded for Order {
    fn defaults() -> Vec<Self> {
        Vec::new()
    }
}
