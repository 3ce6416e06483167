#![allow(dead_code)]

// Shared in-memory service for integration tests. Every endpoint counts its
// calls and can be scripted to fail or stall, so tests can assert not just
// what the state machines show but which requests they issued.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::RwLock;
use shared::client::CheckoutRequest;
use shared::models::{
    Brand, Category, OrderInfo, OrderStatus, OverrideCreate, OverrideUpdate, Product,
    ProductImage, ProductOverride,
};
use shared::response::Page;
use shopfront_core::api::{CatalogApi, CheckoutApi, ImageApi, OverrideApi};
use shopfront_core::catalog::CatalogQuery;
use shopfront_core::error::{ServiceError, ServiceResult};

#[derive(Default)]
pub struct ServiceScript {
    pub products: Vec<Product>,
    pub order: Option<OrderInfo>,
    pub categories: Vec<Category>,
    pub brands: Vec<Brand>,
    pub overrides: Vec<ProductOverride>,
    /// When set, every product listing fails with this error
    pub product_failure: Option<ServiceError>,
    /// When set, every override mutation fails with this error
    pub mutation_failure: Option<ServiceError>,
    /// When set, product listings stall this long before answering
    pub product_delay: Option<Duration>,
}

#[derive(Default)]
pub struct CallCounts {
    pub list_products: AtomicUsize,
    pub order_products: AtomicUsize,
    pub get_order: AtomicUsize,
    pub list_categories: AtomicUsize,
    pub list_brands: AtomicUsize,
    pub list_images: AtomicUsize,
    pub list_overrides: AtomicUsize,
    pub mutations: AtomicUsize,
    pub place_order: AtomicUsize,
}

#[derive(Default)]
pub struct MockService {
    pub script: RwLock<ServiceScript>,
    pub calls: CallCounts,
    pub last_checkout: RwLock<Option<CheckoutRequest>>,
}

/// Install the test log subscriber; only the first call takes effect
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

impl MockService {
    pub fn new() -> Arc<Self> {
        init_tracing();
        Arc::new(Self::default())
    }

    pub fn with_products(self: Arc<Self>, products: Vec<Product>) -> Arc<Self> {
        self.script.write().products = products;
        self
    }

    pub fn with_order(self: Arc<Self>, user_id: &str, status: OrderStatus) -> Arc<Self> {
        self.script.write().order = Some(OrderInfo {
            user_id: user_id.to_string(),
            status,
        });
        self
    }

    pub fn with_overrides(self: Arc<Self>, overrides: Vec<ProductOverride>) -> Arc<Self> {
        self.script.write().overrides = overrides;
        self
    }

    pub fn with_reference(
        self: Arc<Self>,
        categories: Vec<Category>,
        brands: Vec<Brand>,
    ) -> Arc<Self> {
        let mut script = self.script.write();
        script.categories = categories;
        script.brands = brands;
        drop(script);
        self
    }

    pub fn fail_products(&self, error: ServiceError) {
        self.script.write().product_failure = Some(error);
    }

    pub fn fail_mutations(&self, error: ServiceError) {
        self.script.write().mutation_failure = Some(error);
    }

    pub fn delay_products(&self, delay: Option<Duration>) {
        self.script.write().product_delay = delay;
    }

    async fn stall_for_products(&self) -> ServiceResult<()> {
        let (delay, failure) = {
            let script = self.script.read();
            (script.product_delay, script.product_failure.clone())
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        match failure {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CatalogApi for MockService {
    async fn list_products(
        &self,
        _tenant_id: &str,
        query: &CatalogQuery,
    ) -> ServiceResult<Page<Product>> {
        self.calls.list_products.fetch_add(1, Ordering::SeqCst);
        self.stall_for_products().await?;
        let script = self.script.read();
        Ok(page_of(&script.products, query.page, query.page_size))
    }

    async fn list_products_for_order(&self, _order_id: &str) -> ServiceResult<Vec<Product>> {
        self.calls.order_products.fetch_add(1, Ordering::SeqCst);
        self.stall_for_products().await?;
        Ok(self.script.read().products.clone())
    }

    async fn list_categories(&self, _tenant_id: &str) -> ServiceResult<Vec<Category>> {
        self.calls.list_categories.fetch_add(1, Ordering::SeqCst);
        Ok(self.script.read().categories.clone())
    }

    async fn list_brands(&self, _tenant_id: &str) -> ServiceResult<Vec<Brand>> {
        self.calls.list_brands.fetch_add(1, Ordering::SeqCst);
        Ok(self.script.read().brands.clone())
    }

    async fn get_order(&self, _order_id: &str) -> ServiceResult<OrderInfo> {
        self.calls.get_order.fetch_add(1, Ordering::SeqCst);
        match self.script.read().order.clone() {
            Some(info) => Ok(info),
            None => Err(ServiceError::NotFound("Order not found".to_string())),
        }
    }
}

#[async_trait]
impl ImageApi for MockService {
    async fn list_images(
        &self,
        _tenant_id: &str,
        product_id: &str,
    ) -> ServiceResult<Vec<ProductImage>> {
        self.calls.list_images.fetch_add(1, Ordering::SeqCst);
        Ok(vec![ProductImage {
            url: format!("https://cdn.test/{product_id}/0.jpg"),
        }])
    }
}

#[async_trait]
impl OverrideApi for MockService {
    async fn list(
        &self,
        _customer_id: &str,
        page: u32,
        size: u32,
    ) -> ServiceResult<Page<ProductOverride>> {
        self.calls.list_overrides.fetch_add(1, Ordering::SeqCst);
        let script = self.script.read();
        if let Some(error) = script.product_failure.clone() {
            return Err(error);
        }
        Ok(page_of(&script.overrides, page, size))
    }

    async fn create(&self, payload: &OverrideCreate) -> ServiceResult<ProductOverride> {
        self.calls.mutations.fetch_add(1, Ordering::SeqCst);
        let mut script = self.script.write();
        if let Some(error) = script.mutation_failure.clone() {
            return Err(error);
        }
        let created = ProductOverride {
            id: format!("ov-{}", script.overrides.len() + 1),
            product_id: payload.product_id.clone(),
            customer_id: payload.customer_id.clone(),
            override_price: payload.override_price,
            original_price: 0.0,
            product_name: format!("Product {}", payload.product_id),
        };
        script.overrides.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &str, payload: &OverrideUpdate) -> ServiceResult<ProductOverride> {
        self.calls.mutations.fetch_add(1, Ordering::SeqCst);
        let mut script = self.script.write();
        if let Some(error) = script.mutation_failure.clone() {
            return Err(error);
        }
        let entry = script
            .overrides
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| ServiceError::NotFound("Override not found".to_string()))?;
        entry.override_price = payload.override_price;
        Ok(entry.clone())
    }

    async fn delete(&self, id: &str) -> ServiceResult<()> {
        self.calls.mutations.fetch_add(1, Ordering::SeqCst);
        let mut script = self.script.write();
        if let Some(error) = script.mutation_failure.clone() {
            return Err(error);
        }
        script.overrides.retain(|o| o.id != id);
        Ok(())
    }
}

#[async_trait]
impl CheckoutApi for MockService {
    async fn place_order(&self, request: &CheckoutRequest) -> ServiceResult<()> {
        self.calls.place_order.fetch_add(1, Ordering::SeqCst);
        *self.last_checkout.write() = Some(request.clone());
        Ok(())
    }
}

// =============================================================================
// Fixtures
// =============================================================================

/// Plain server-side pagination, no filters or sort
fn page_of<T: Clone>(items: &[T], page: u32, size: u32) -> Page<T> {
    let start = (page as usize) * (size as usize);
    let content: Vec<T> = items.iter().skip(start).take(size as usize).cloned().collect();
    Page::of(
        content,
        (items.len() as u32).div_ceil(size.max(1)),
        items.len() as u64,
    )
}

pub fn product(id: &str, name: &str, special_price: f64) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        original_price: special_price,
        special_price,
        category_id: None,
        brand_id: None,
        picture_url: None,
    }
}

/// `n` products with ids `p-01..`, names `Product 01..`, ascending prices
pub fn product_range(n: usize) -> Vec<Product> {
    (1..=n)
        .map(|i| product(&format!("p-{i:02}"), &format!("Product {i:02}"), i as f64))
        .collect()
}

pub fn category(id: &str, name: &str) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
    }
}

pub fn brand(id: &str, name: &str) -> Brand {
    Brand {
        id: id.to_string(),
        name: name.to_string(),
    }
}

pub fn price_override(id: &str, product_id: &str, price: f64) -> ProductOverride {
    ProductOverride {
        id: id.to_string(),
        product_id: product_id.to_string(),
        customer_id: "c-1".to_string(),
        override_price: price,
        original_price: price + 5.0,
        product_name: format!("Product {product_id}"),
    }
}
