//! Service trait seams between the state machines and the REST client
//!
//! The state containers in this crate only ever talk to these traits; the
//! network implementation lives in `shopfront-client`, and the integration
//! tests swap in an in-memory mock.

use async_trait::async_trait;
use shared::client::CheckoutRequest;
use shared::models::{
    Brand, Category, OrderInfo, OverrideCreate, OverrideUpdate, Product, ProductImage,
    ProductOverride,
};
use shared::response::Page;

use crate::catalog::CatalogQuery;
use crate::error::ServiceResult;

/// Catalog retrieval
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Server-paginated product listing for a tenant's live catalog
    async fn list_products(
        &self,
        tenant_id: &str,
        query: &CatalogQuery,
    ) -> ServiceResult<Page<Product>>;

    /// Full override-priced product set for an order, no pagination
    async fn list_products_for_order(&self, order_id: &str) -> ServiceResult<Vec<Product>>;

    /// Filter reference data
    async fn list_categories(&self, tenant_id: &str) -> ServiceResult<Vec<Category>>;
    async fn list_brands(&self, tenant_id: &str) -> ServiceResult<Vec<Brand>>;

    /// Order header, checked before any order-scoped product fetch
    async fn get_order(&self, order_id: &str) -> ServiceResult<OrderInfo>;
}

/// Per-product image listings
#[async_trait]
pub trait ImageApi: Send + Sync {
    async fn list_images(
        &self,
        tenant_id: &str,
        product_id: &str,
    ) -> ServiceResult<Vec<ProductImage>>;
}

/// Price override CRUD
#[async_trait]
pub trait OverrideApi: Send + Sync {
    async fn list(
        &self,
        customer_id: &str,
        page: u32,
        size: u32,
    ) -> ServiceResult<Page<ProductOverride>>;

    async fn create(&self, payload: &OverrideCreate) -> ServiceResult<ProductOverride>;
    async fn update(&self, id: &str, payload: &OverrideUpdate) -> ServiceResult<ProductOverride>;
    async fn delete(&self, id: &str) -> ServiceResult<()>;
}

/// Checkout submission
#[async_trait]
pub trait CheckoutApi: Send + Sync {
    async fn place_order(&self, request: &CheckoutRequest) -> ServiceResult<()>;
}
