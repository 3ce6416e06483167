//! Catalog browsing state machine
//!
//! One `CatalogBrowser` per catalog surface, configured by a capability set
//! and a retrieval mode fixed at construction: live (server paginates) or
//! order-scoped (full set fetched once, paginated locally). Overlapping
//! fetches are serialized by outcome, not by execution: every refresh draws a
//! ticket and only the latest ticket may write the view.

pub mod local;
pub mod query;

pub use query::{CatalogQuery, SortDirection, SortField};

use std::sync::Arc;

use parking_lot::RwLock;
use shared::models::{Brand, Category, OrderStatus, Product};
use shared::response::Page;

use crate::api::CatalogApi;
use crate::error::ServiceError;
use crate::ticket::RequestTickets;

/// Page-size options for the customer-facing catalog surfaces
pub const CATALOG_PAGE_SIZES: &[u32] = &[2, 10, 20, 50, 100];

// =============================================================================
// Types
// =============================================================================

/// Capability set configuring one catalog surface
///
/// The caps own which filters exist and which page sizes the surface offers;
/// the query state owns the currently selected values.
#[derive(Debug, Clone)]
pub struct CatalogCaps {
    pub category_filter: bool,
    pub brand_filter: bool,
    pub page_sizes: &'static [u32],
    pub default_page_size: u32,
}

impl CatalogCaps {
    /// Full storefront surface: both filters, standard size options
    pub fn storefront() -> Self {
        Self {
            category_filter: true,
            brand_filter: true,
            page_sizes: CATALOG_PAGE_SIZES,
            default_page_size: 10,
        }
    }

    /// Whether a page size is one of this surface's options
    pub fn allows_page_size(&self, size: u32) -> bool {
        self.page_sizes.contains(&size)
    }
}

/// Retrieval mode, fixed at construction
#[derive(Debug, Clone)]
enum BrowseMode {
    /// Server-side pagination against a tenant's live catalog
    Live { tenant_id: String },
    /// Full order-priced set fetched once, paginated locally
    OrderScoped { order_id: String },
}

/// Terminal order state that replaces the catalog entirely
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClosedOrder {
    LinkExpired,
    Cancelled,
    AlreadyCompleted,
    AlreadyPlaced,
}

/// What the catalog surface currently shows
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogView {
    Loading,
    Ready(Page<Product>),
    /// Tenant or order does not exist
    NotFound,
    /// Exists but is not accessible to this caller
    Forbidden,
    /// Transient failure; offers a manual reload
    Failed(String),
    /// Order reached a terminal status; all fetching stops
    Closed(ClosedOrder),
}

fn error_view(err: ServiceError) -> CatalogView {
    match err {
        ServiceError::NotFound(_) => CatalogView::NotFound,
        ServiceError::Forbidden(_) | ServiceError::Unauthorized => CatalogView::Forbidden,
        other => CatalogView::Failed(other.to_string()),
    }
}

// =============================================================================
// CatalogBrowser
// =============================================================================

/// Pagination/filter/sort orchestrator for one catalog surface
#[derive(Clone)]
pub struct CatalogBrowser {
    api: Arc<dyn CatalogApi>,
    caps: CatalogCaps,
    mode: BrowseMode,
    query: Arc<RwLock<CatalogQuery>>,
    view: Arc<RwLock<CatalogView>>,
    /// Cached full set, order-scoped mode only
    order_products: Arc<RwLock<Option<Vec<Product>>>>,
    /// Order owner, known once the status gate has passed
    order_user: Arc<RwLock<Option<String>>>,
    /// Set once an order turns out terminal; suppresses all further fetching
    gate: Arc<RwLock<Option<ClosedOrder>>>,
    tickets: Arc<RequestTickets>,
    categories: Arc<RwLock<Vec<Category>>>,
    brands: Arc<RwLock<Vec<Brand>>>,
}

impl std::fmt::Debug for CatalogBrowser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogBrowser")
            .field("mode", &self.mode)
            .field("query", &*self.query.read())
            .finish()
    }
}

impl CatalogBrowser {
    fn new(api: Arc<dyn CatalogApi>, caps: CatalogCaps, mode: BrowseMode) -> Self {
        let query = CatalogQuery::new(caps.default_page_size);
        Self {
            api,
            caps,
            mode,
            query: Arc::new(RwLock::new(query)),
            view: Arc::new(RwLock::new(CatalogView::Loading)),
            order_products: Arc::new(RwLock::new(None)),
            order_user: Arc::new(RwLock::new(None)),
            gate: Arc::new(RwLock::new(None)),
            tickets: Arc::new(RequestTickets::new()),
            categories: Arc::new(RwLock::new(Vec::new())),
            brands: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Browse a tenant's live catalog
    pub fn for_store(
        api: Arc<dyn CatalogApi>,
        caps: CatalogCaps,
        tenant_id: impl Into<String>,
    ) -> Self {
        Self::new(
            api,
            caps,
            BrowseMode::Live {
                tenant_id: tenant_id.into(),
            },
        )
    }

    /// Browse the override-priced set of one order
    pub fn for_order(
        api: Arc<dyn CatalogApi>,
        caps: CatalogCaps,
        order_id: impl Into<String>,
    ) -> Self {
        Self::new(
            api,
            caps,
            BrowseMode::OrderScoped {
                order_id: order_id.into(),
            },
        )
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn view(&self) -> CatalogView {
        self.view.read().clone()
    }

    pub fn query(&self) -> CatalogQuery {
        self.query.read().clone()
    }

    pub fn caps(&self) -> &CatalogCaps {
        &self.caps
    }

    pub fn categories(&self) -> Vec<Category> {
        self.categories.read().clone()
    }

    pub fn brands(&self) -> Vec<Brand> {
        self.brands.read().clone()
    }

    /// Display label for a category id, `"Category"` when unresolved
    pub fn category_label(&self, id: Option<&str>) -> String {
        id.and_then(|id| {
            self.categories
                .read()
                .iter()
                .find(|c| c.id == id)
                .map(|c| c.name.clone())
        })
        .unwrap_or_else(|| "Category".to_string())
    }

    /// Display label for a brand id, blank when unresolved
    pub fn brand_label(&self, id: Option<&str>) -> String {
        id.and_then(|id| {
            self.brands
                .read()
                .iter()
                .find(|b| b.id == id)
                .map(|b| b.name.clone())
        })
        .unwrap_or_default()
    }

    // =========================================================================
    // Query mutation (each mutation is the trigger for a re-fetch)
    // =========================================================================

    pub async fn set_page(&self, page: u32) {
        self.query.write().set_page(page);
        self.refresh().await;
    }

    pub async fn set_page_size(&self, size: u32) {
        if !self.caps.allows_page_size(size) {
            tracing::warn!(size, "Ignoring page size outside the configured options");
            return;
        }
        self.query.write().set_page_size(size);
        self.refresh().await;
    }

    pub async fn set_sort(&self, field: SortField) {
        self.query.write().set_sort(field);
        self.refresh().await;
    }

    pub async fn set_category(&self, category: Option<String>) {
        if !self.caps.category_filter {
            tracing::warn!("Ignoring category filter on a surface without one");
            return;
        }
        self.query.write().set_category(category);
        self.refresh().await;
    }

    pub async fn set_brand(&self, brand: Option<String>) {
        if !self.caps.brand_filter {
            tracing::warn!("Ignoring brand filter on a surface without one");
            return;
        }
        self.query.write().set_brand(brand);
        self.refresh().await;
    }

    /// Manual retry from the failure view
    pub async fn reload(&self) {
        self.refresh().await;
    }

    // =========================================================================
    // Fetching
    // =========================================================================

    /// Fetch the page described by the current query
    ///
    /// Safe to call while an earlier refresh is still in flight; whichever
    /// holds the newest ticket wins the view.
    pub async fn refresh(&self) {
        if self.gate.read().is_some() {
            return;
        }

        let ticket = self.tickets.issue();
        self.apply(ticket, CatalogView::Loading);

        match self.mode.clone() {
            BrowseMode::Live { tenant_id } => {
                let query = self.query();
                match self.api.list_products(&tenant_id, &query).await {
                    Ok(page) => self.apply(ticket, CatalogView::Ready(page)),
                    Err(e) => self.apply(ticket, error_view(e)),
                }
            }
            BrowseMode::OrderScoped { order_id } => {
                self.refresh_order_scoped(&order_id, ticket).await;
            }
        }
    }

    async fn refresh_order_scoped(&self, order_id: &str, ticket: u64) {
        // The full set is fetched once; afterwards every query change is a
        // purely local recompute.
        let cached_page = {
            let cache = self.order_products.read();
            cache
                .as_ref()
                .map(|products| local::paginate(products, &self.query()))
        };
        if let Some(page) = cached_page {
            self.apply(ticket, CatalogView::Ready(page));
            return;
        }

        let info = match self.api.get_order(order_id).await {
            Ok(info) => info,
            Err(e) => {
                self.apply(ticket, error_view(e));
                return;
            }
        };

        if let Some(closed) = closed_reason(info.status) {
            *self.gate.write() = Some(closed);
            self.apply(ticket, CatalogView::Closed(closed));
            return;
        }
        *self.order_user.write() = Some(info.user_id);

        let products = match self.api.list_products_for_order(order_id).await {
            Ok(products) => products,
            Err(e) => {
                self.apply(ticket, error_view(e));
                return;
            }
        };

        let page = local::paginate(&products, &self.query());
        *self.order_products.write() = Some(products);
        self.apply(ticket, CatalogView::Ready(page));
    }

    /// Write a view only while its ticket is still the latest
    fn apply(&self, ticket: u64, view: CatalogView) {
        if self.tickets.is_current(ticket) {
            *self.view.write() = view;
        } else {
            tracing::debug!(ticket, "Discarding superseded catalog response");
        }
    }

    // =========================================================================
    // Reference data
    // =========================================================================

    /// Load categories and brands for the filter dropdowns
    ///
    /// Failures degrade to empty lists; the catalog itself stays usable.
    pub async fn load_reference(&self) {
        let tenant_id = match &self.mode {
            BrowseMode::Live { tenant_id } => tenant_id.clone(),
            BrowseMode::OrderScoped { .. } => match self.order_user.read().clone() {
                Some(user_id) => user_id,
                None => {
                    tracing::warn!("Reference data requested before the order gate passed");
                    return;
                }
            },
        };

        if self.caps.category_filter {
            match self.api.list_categories(&tenant_id).await {
                Ok(categories) => *self.categories.write() = categories,
                Err(e) => {
                    tracing::warn!(tenant_id = %tenant_id, error = %e, "Failed to load categories")
                }
            }
        }
        if self.caps.brand_filter {
            match self.api.list_brands(&tenant_id).await {
                Ok(brands) => *self.brands.write() = brands,
                Err(e) => {
                    tracing::warn!(tenant_id = %tenant_id, error = %e, "Failed to load brands")
                }
            }
        }
    }
}

fn closed_reason(status: OrderStatus) -> Option<ClosedOrder> {
    match status {
        OrderStatus::Active => None,
        OrderStatus::Expired => Some(ClosedOrder::LinkExpired),
        OrderStatus::Cancelled => Some(ClosedOrder::Cancelled),
        OrderStatus::Done => Some(ClosedOrder::AlreadyCompleted),
        OrderStatus::Placed => Some(ClosedOrder::AlreadyPlaced),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storefront_caps_offer_standard_sizes() {
        let caps = CatalogCaps::storefront();
        assert!(caps.allows_page_size(2));
        assert!(caps.allows_page_size(100));
        assert!(!caps.allows_page_size(3));
    }

    #[test]
    fn every_terminal_status_maps_to_a_distinct_screen() {
        assert_eq!(closed_reason(OrderStatus::Active), None);
        assert_eq!(
            closed_reason(OrderStatus::Expired),
            Some(ClosedOrder::LinkExpired)
        );
        assert_eq!(
            closed_reason(OrderStatus::Cancelled),
            Some(ClosedOrder::Cancelled)
        );
        assert_eq!(
            closed_reason(OrderStatus::Done),
            Some(ClosedOrder::AlreadyCompleted)
        );
        assert_eq!(
            closed_reason(OrderStatus::Placed),
            Some(ClosedOrder::AlreadyPlaced)
        );
    }
}
