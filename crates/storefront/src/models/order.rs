//! Customer orders.

use chrono::{DateTime, Utc};
use handora_core::{OrderId, OrderStatus, Price};
use serde::{Deserialize, Serialize};

use super::cart::CartItem;

/// The customer an order belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCustomer {
    pub name: String,
    pub email: String,
}

/// A recorded order, as shown on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub customer: OrderCustomer,
    pub items: Vec<CartItem>,
    pub total: Price,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_order_serde_layout() {
        let order = Order {
            id: OrderId::new("1700000000000"),
            customer: OrderCustomer {
                name: "Mai Tran".to_string(),
                email: "mai@example.com".to_string(),
            },
            items: vec![],
            total: Price::from_cents(0),
            status: OrderStatus::Pending,
            created_at: "2024-03-20T10:00:00Z".parse().unwrap(),
        };
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["status"], "pending");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("created_at").is_none());
    }
}
