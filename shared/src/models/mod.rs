//! Data models
//!
//! Shared between the storefront backend (via API) and the client core.
//! All IDs are opaque strings assigned by the backend.

pub mod category;
pub mod image;
pub mod order;
pub mod product;
pub mod product_override;

// Re-exports
pub use category::*;
pub use image::*;
pub use order::*;
pub use product::*;
pub use product_override::*;
