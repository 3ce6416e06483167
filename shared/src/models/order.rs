//! Order metadata model

use serde::{Deserialize, Serialize};

/// Order lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Active,
    Expired,
    Cancelled,
    Done,
    Placed,
}

impl OrderStatus {
    /// Whether the order still accepts browsing and checkout
    pub fn is_active(&self) -> bool {
        matches!(self, OrderStatus::Active)
    }
}

/// Order header fetched before an order-scoped catalog load
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderInfo {
    /// Customer the order belongs to; scopes pricing and overrides
    pub user_id: String,
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_screaming_snake_case() {
        let json = r#"{"userId":"u-9","status":"CANCELLED"}"#;
        let info: OrderInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.status, OrderStatus::Cancelled);
        assert!(!info.status.is_active());
    }
}
