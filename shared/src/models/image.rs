//! Product image model

use serde::{Deserialize, Serialize};

/// One gallery image for a product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductImage {
    pub url: String,
}
