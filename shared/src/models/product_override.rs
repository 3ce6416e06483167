//! Per-customer price override model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Upper bound accepted for an override price
pub const MAX_OVERRIDE_PRICE: f64 = 1_000_000.0;

/// Price override entity
///
/// Binds one product to one customer at a fixed price. The backend
/// denormalizes `product_name` and `original_price` into the row so the
/// listing can render without a second product fetch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductOverride {
    pub id: String,
    pub product_id: String,
    pub customer_id: String,
    pub override_price: f64,
    pub original_price: f64,
    pub product_name: String,
}

/// Create override payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OverrideCreate {
    pub product_id: String,
    pub customer_id: String,
    #[validate(range(exclusive_min = 0.0, max = 1_000_000.0))]
    pub override_price: f64,
}

/// Update override payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OverrideUpdate {
    #[validate(range(exclusive_min = 0.0, max = 1_000_000.0))]
    pub override_price: f64,
}
