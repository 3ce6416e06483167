//! Product Model

use serde::{Deserialize, Serialize};

/// Catalog product as served by the backend
///
/// `special_price` is the effective selling price: when a per-customer
/// override exists the backend resolves it server-side before the
/// product reaches the client, so the client never re-derives it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// List price before any per-customer override
    pub original_price: f64,
    /// Effective selling price (override-resolved)
    pub special_price: f64,
    pub category_id: Option<String>,
    pub brand_id: Option<String>,
    /// Primary picture; the full gallery comes from the images endpoint
    pub picture_url: Option<String>,
}

impl Product {
    /// Whether the effective price differs from the list price
    pub fn has_discount(&self) -> bool {
        self.special_price != self.original_price
    }
}
