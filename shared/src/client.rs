//! Client-facing request/response types
//!
//! Auth and checkout payloads exchanged with the storefront backend.
//! The backend expects camelCase keys on every payload.

use serde::{Deserialize, Serialize};

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// Authenticated user information
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub role: String,
}

// =============================================================================
// Checkout API DTOs
// =============================================================================

/// One cart line submitted at checkout
///
/// `unit_price` is the price frozen when the line entered the cart, not
/// the live catalog price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutItem {
    pub product_id: String,
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
}

/// Checkout submission
///
/// `request_id` is generated fresh per submission so the backend can
/// deduplicate retries of the same cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub request_id: String,
    pub order_id: String,
    pub user_id: String,
    pub items: Vec<CheckoutItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkout_request_serializes_camel_case() {
        let req = CheckoutRequest {
            request_id: "r-1".into(),
            order_id: "o-7".into(),
            user_id: "u-3".into(),
            items: vec![CheckoutItem {
                product_id: "p-11".into(),
                name: "Espresso".into(),
                unit_price: 2.5,
                quantity: 2,
            }],
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["requestId"], "r-1");
        assert_eq!(json["orderId"], "o-7");
        assert_eq!(json["items"][0]["productId"], "p-11");
        assert_eq!(json["items"][0]["unitPrice"], 2.5);
    }
}
