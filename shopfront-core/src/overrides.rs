//! Per-customer price override list and edit state machine
//!
//! Server-side pagination only; after any mutation the current page is
//! re-fetched so the list always shows server truth, never an optimistic
//! patch.

use std::sync::Arc;

use parking_lot::RwLock;
use shared::models::{OverrideCreate, OverrideUpdate, ProductOverride};
use shared::response::Page;
use validator::Validate;

use crate::api::OverrideApi;
use crate::catalog::CatalogQuery;
use crate::error::{ServiceError, ServiceResult};
use crate::money;
use crate::ticket::RequestTickets;

/// Page-size options for the override list
pub const OVERRIDE_PAGE_SIZES: &[u32] = &[1, 10, 20, 50];

/// What the override list currently shows
#[derive(Debug, Clone, PartialEq)]
pub enum OverrideView {
    Loading,
    Ready(Page<ProductOverride>),
    /// Customer does not exist
    NotFound,
    /// Customer exists but is not visible to this caller
    Forbidden,
    /// Transient failure; offers a manual reload
    Failed(String),
}

fn error_view(err: ServiceError) -> OverrideView {
    match err {
        ServiceError::NotFound(_) => OverrideView::NotFound,
        ServiceError::Forbidden(_) | ServiceError::Unauthorized => OverrideView::Forbidden,
        other => OverrideView::Failed(other.to_string()),
    }
}

// =============================================================================
// OverrideManager
// =============================================================================

/// List/edit orchestrator for one customer's price overrides
#[derive(Clone)]
pub struct OverrideManager {
    api: Arc<dyn OverrideApi>,
    customer_id: String,
    /// Only page and page_size are in play; the list has no sort or filters
    query: Arc<RwLock<CatalogQuery>>,
    view: Arc<RwLock<OverrideView>>,
    tickets: Arc<RequestTickets>,
}

impl std::fmt::Debug for OverrideManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverrideManager")
            .field("customer_id", &self.customer_id)
            .field("query", &*self.query.read())
            .finish()
    }
}

impl OverrideManager {
    pub fn new(api: Arc<dyn OverrideApi>, customer_id: impl Into<String>) -> Self {
        Self {
            api,
            customer_id: customer_id.into(),
            query: Arc::new(RwLock::new(CatalogQuery::new(10))),
            view: Arc::new(RwLock::new(OverrideView::Loading)),
            tickets: Arc::new(RequestTickets::new()),
        }
    }

    pub fn view(&self) -> OverrideView {
        self.view.read().clone()
    }

    pub fn query(&self) -> CatalogQuery {
        self.query.read().clone()
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub async fn set_page(&self, page: u32) {
        self.query.write().set_page(page);
        self.refresh().await;
    }

    pub async fn set_page_size(&self, size: u32) {
        if !OVERRIDE_PAGE_SIZES.contains(&size) {
            tracing::warn!(size, "Ignoring page size outside the configured options");
            return;
        }
        self.query.write().set_page_size(size);
        self.refresh().await;
    }

    /// Fetch the page described by the current query
    pub async fn refresh(&self) {
        let ticket = self.tickets.issue();
        self.apply(ticket, OverrideView::Loading);

        let (page, size) = {
            let query = self.query.read();
            (query.page, query.page_size)
        };
        match self.api.list(&self.customer_id, page, size).await {
            Ok(listed) => self.apply(ticket, OverrideView::Ready(listed)),
            Err(e) => self.apply(ticket, error_view(e)),
        }
    }

    fn apply(&self, ticket: u64, view: OverrideView) {
        if self.tickets.is_current(ticket) {
            *self.view.write() = view;
        } else {
            tracing::debug!(ticket, "Discarding superseded override response");
        }
    }

    // =========================================================================
    // Mutations (server truth: success re-fetches, failure leaves the list)
    // =========================================================================

    pub async fn create(&self, payload: OverrideCreate) -> ServiceResult<()> {
        payload
            .validate()
            .map_err(|e| ServiceError::Validation(e.to_string()))?;
        self.api.create(&payload).await?;
        self.refresh().await;
        Ok(())
    }

    pub async fn update(&self, id: &str, payload: OverrideUpdate) -> ServiceResult<()> {
        payload
            .validate()
            .map_err(|e| ServiceError::Validation(e.to_string()))?;
        self.api.update(id, &payload).await?;
        self.refresh().await;
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> ServiceResult<()> {
        self.api.delete(id).await?;
        self.refresh().await;
        Ok(())
    }
}

// =============================================================================
// PriceField
// =============================================================================

/// Price input model for the override dialog
///
/// Text above the price cap is clamped as it is typed; zero, negative or
/// unparseable text stays visible but yields no submittable value, so it can
/// never reach the network.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceField {
    text: String,
}

impl PriceField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefill from an existing override price
    pub fn with_value(value: f64) -> Self {
        let mut field = Self::new();
        field.set_text(&format_price(value));
        field
    }

    /// Accept an edit, rewriting the text only when the cap clamps it
    pub fn set_text(&mut self, input: &str) {
        self.text = input.to_string();
        if let Ok(parsed) = input.trim().parse::<f64>()
            && let Some(clamped) = money::clamp_override_price(parsed)
            && clamped < parsed
        {
            self.text = format_price(clamped);
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The submittable price, `None` while the text is not a valid price
    pub fn value(&self) -> Option<f64> {
        let parsed = self.text.trim().parse::<f64>().ok()?;
        money::clamp_override_price(parsed)
    }

    pub fn is_valid(&self) -> bool {
        self.value().is_some()
    }
}

fn format_price(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
