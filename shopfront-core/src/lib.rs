//! Storefront client core
//!
//! The state machines behind the storefront and back-office UI: catalog
//! pagination/filter/sort with dual-mode fetching and stale-response
//! discarding, per-product image resolution, the cart with pending
//! quantities and just-added badges, per-customer price overrides, and
//! checkout assembly. All remote work goes through the service traits in
//! [`api`]; `shopfront-client` provides the HTTP implementation.

pub mod api;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod images;
pub mod money;
pub mod overrides;
pub mod session;
pub mod ticket;

pub use api::{CatalogApi, CheckoutApi, ImageApi, OverrideApi};
pub use cart::{CartItem, CartStore, JUST_ADDED_DURATION};
pub use catalog::{
    CATALOG_PAGE_SIZES, CatalogBrowser, CatalogCaps, CatalogQuery, CatalogView, ClosedOrder,
    SortDirection, SortField,
};
pub use checkout::build_checkout;
pub use error::{ServiceError, ServiceResult};
pub use images::ImageGallery;
pub use overrides::{OVERRIDE_PAGE_SIZES, OverrideManager, OverrideView, PriceField};
pub use session::Session;
pub use ticket::RequestTickets;
