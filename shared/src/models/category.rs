//! Category and brand models

use serde::{Deserialize, Serialize};

/// Product category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// Product brand
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Brand {
    pub id: String,
    pub name: String,
}
