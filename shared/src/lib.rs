//! Shared types for the shopfront stack
//!
//! Wire-level data structures exchanged with the storefront backend:
//! catalog models, order metadata, pagination envelopes and the
//! checkout/auth request types.

pub mod client;
pub mod models;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{
    Brand, Category, OrderInfo, OrderStatus, Product, ProductImage, ProductOverride,
};
pub use response::Page;
