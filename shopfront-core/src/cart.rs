//! Cart store with pending quantities and the transient "just added" badge
//!
//! Process-local by contract: the cart is never persisted and is lost when
//! the store is dropped. A product id lives in at most one of {cart, pending
//! quantities}; entering the cart clears its pending entry, and from then on
//! the cart quantity is the single source of truth for that product's
//! stepper.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::RwLock;
use rust_decimal::Decimal;
use shared::models::Product;
use tokio::task::JoinHandle;

use crate::money;

/// How long the "just added" badge stays visible after an add
pub const JUST_ADDED_DURATION: Duration = Duration::from_secs(2);

/// One cart line: the product snapshot taken at add time plus a quantity
///
/// The snapshot price is frozen; it is never re-synced against a possibly
/// changed live price.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

#[derive(Default)]
struct CartState {
    /// Insertion order preserved; at most one entry per product id
    items: Vec<CartItem>,
    /// Stepper values for products not yet in the cart
    pending: HashMap<String, u32>,
    /// Product ids currently showing the badge
    just_added: HashSet<String>,
    /// Clear timers, one per badged id; re-adding aborts and re-arms
    badge_tasks: HashMap<String, JoinHandle<()>>,
}

struct CartInner {
    state: RwLock<CartState>,
}

/// Shared cart handle
#[derive(Clone)]
pub struct CartStore {
    inner: Arc<CartInner>,
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.state.read();
        f.debug_struct("CartStore")
            .field("items", &state.items.len())
            .field("pending", &state.pending.len())
            .finish()
    }
}

impl CartStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(CartInner {
                state: RwLock::new(CartState::default()),
            }),
        }
    }

    // =========================================================================
    // Cart mutation
    // =========================================================================

    /// Add a product, merging by id
    ///
    /// Clears the product's pending entry, marks it "just added" and
    /// (re-)arms the 2-second badge clear.
    pub fn add_to_cart(&self, product: Product, quantity: u32) {
        let id = product.id.clone();
        {
            let mut state = self.inner.state.write();
            match state.items.iter_mut().find(|i| i.product.id == id) {
                Some(item) => item.quantity += quantity,
                None => state.items.push(CartItem { product, quantity }),
            }
            state.pending.remove(&id);
            state.just_added.insert(id.clone());
            if let Some(old) = state.badge_tasks.remove(&id) {
                old.abort();
            }
        }
        self.arm_badge_clear(id);
    }

    /// Set a cart quantity verbatim; zero removes the item
    pub fn update_quantity(&self, product_id: &str, quantity: u32) {
        let mut state = self.inner.state.write();
        Self::apply_quantity(&mut state, product_id, quantity);
    }

    pub fn remove_from_cart(&self, product_id: &str) {
        let mut state = self.inner.state.write();
        state.items.retain(|i| i.product.id != product_id);
    }

    fn apply_quantity(state: &mut CartState, product_id: &str, quantity: u32) {
        if quantity == 0 {
            state.items.retain(|i| i.product.id != product_id);
            return;
        }
        if let Some(item) = state.items.iter_mut().find(|i| i.product.id == product_id) {
            item.quantity = quantity;
        }
    }

    // =========================================================================
    // Stepper (reads/writes cart or pending, whichever owns the id)
    // =========================================================================

    /// Displayed stepper value: cart quantity, else pending, else 1
    pub fn stepper_value(&self, product_id: &str) -> u32 {
        let state = self.inner.state.read();
        match state.items.iter().find(|i| i.product.id == product_id) {
            Some(item) => item.quantity,
            None => state.pending.get(product_id).copied().unwrap_or(1),
        }
    }

    pub fn increment_stepper(&self, product_id: &str) {
        let mut state = self.inner.state.write();
        if let Some(item) = state.items.iter_mut().find(|i| i.product.id == product_id) {
            item.quantity += 1;
        } else {
            *state.pending.entry(product_id.to_string()).or_insert(1) += 1;
        }
    }

    /// Decrement: pending floors at 1, an in-cart quantity of 1 removes
    pub fn decrement_stepper(&self, product_id: &str) {
        let mut state = self.inner.state.write();
        if let Some(item) = state.items.iter().find(|i| i.product.id == product_id) {
            let next = item.quantity.saturating_sub(1);
            Self::apply_quantity(&mut state, product_id, next);
        } else {
            let value = state.pending.entry(product_id.to_string()).or_insert(1);
            *value = value.saturating_sub(1).max(1);
        }
    }

    /// Set a pending quantity; ignored for products already in the cart
    pub fn update_pending_quantity(&self, product_id: &str, quantity: u32) {
        let mut state = self.inner.state.write();
        if state.items.iter().any(|i| i.product.id == product_id) {
            return;
        }
        state.pending.insert(product_id.to_string(), quantity.max(1));
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Sum of quantities across all lines
    pub fn total_items(&self) -> u32 {
        self.inner.state.read().items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of quantity × frozen snapshot price, exact to the cent
    pub fn total_price(&self) -> f64 {
        let state = self.inner.state.read();
        let total: Decimal = state
            .items
            .iter()
            .map(|i| money::line_total(i.product.special_price, i.quantity))
            .sum();
        money::to_f64(total)
    }

    pub fn is_empty(&self) -> bool {
        self.inner.state.read().items.is_empty()
    }

    pub fn is_just_added(&self, product_id: &str) -> bool {
        self.inner.state.read().just_added.contains(product_id)
    }

    /// Cart lines in insertion order, for rendering and checkout
    pub fn snapshot(&self) -> Vec<CartItem> {
        self.inner.state.read().items.clone()
    }

    // =========================================================================
    // Badge lifecycle
    // =========================================================================

    fn arm_badge_clear(&self, product_id: String) {
        let weak: Weak<CartInner> = Arc::downgrade(&self.inner);
        let task_id = product_id.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(JUST_ADDED_DURATION).await;
            // Firing after the store is gone is a no-op
            if let Some(inner) = weak.upgrade() {
                let mut state = inner.state.write();
                state.just_added.remove(&task_id);
                state.badge_tasks.remove(&task_id);
            }
        });

        let mut state = self.inner.state.write();
        if let Some(old) = state.badge_tasks.insert(product_id, handle) {
            old.abort();
        }
    }

    /// Abort every armed badge timer and clear the markers
    pub fn shutdown(&self) {
        let mut state = self.inner.state.write();
        for (_, handle) in state.badge_tasks.drain() {
            handle.abort();
        }
        state.just_added.clear();
    }
}
