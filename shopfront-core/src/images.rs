//! Per-product image resolution and carousel position tracking
//!
//! Product listings carry only a primary `picture_url`; the full image set
//! is resolved lazily, one request per product, when a page of results is
//! shown. Resolved sets are kept for the life of the gallery so revisiting
//! a page never re-fetches.

use std::sync::Arc;

use dashmap::DashMap;

use crate::api::ImageApi;

struct ImageSet {
    urls: Vec<String>,
    /// Carousel position, always < urls.len() when urls is non-empty
    index: usize,
}

/// Shared image cache handle
#[derive(Clone)]
pub struct ImageGallery {
    api: Arc<dyn ImageApi>,
    sets: Arc<DashMap<String, ImageSet>>,
}

impl std::fmt::Debug for ImageGallery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageGallery")
            .field("resolved", &self.sets.len())
            .finish()
    }
}

impl ImageGallery {
    pub fn new(api: Arc<dyn ImageApi>) -> Self {
        Self {
            api,
            sets: Arc::new(DashMap::new()),
        }
    }

    /// Resolve image sets for every product on a page that has none yet
    ///
    /// Fetches run concurrently and the results land as one batch. A failed
    /// fetch records an empty set so the product falls back to its primary
    /// picture instead of re-fetching on every page visit.
    pub async fn load_for_page(&self, tenant_id: &str, product_ids: &[String]) {
        let missing: Vec<String> = product_ids
            .iter()
            .filter(|id| !self.sets.contains_key(id.as_str()))
            .cloned()
            .collect();
        if missing.is_empty() {
            return;
        }

        let fetches = missing.iter().map(|product_id| {
            let api = Arc::clone(&self.api);
            async move {
                let urls = match api.list_images(tenant_id, product_id).await {
                    Ok(images) => images.into_iter().map(|image| image.url).collect(),
                    Err(e) => {
                        tracing::warn!(
                            product_id = %product_id,
                            error = %e,
                            "Failed to resolve product images"
                        );
                        Vec::new()
                    }
                };
                (product_id.clone(), urls)
            }
        });

        for (product_id, urls) in futures::future::join_all(fetches).await {
            // A racing load may have filled this id; keep its carousel position
            self.sets
                .entry(product_id)
                .or_insert(ImageSet { urls, index: 0 });
        }
    }

    /// Resolved urls, empty when unknown or when the product has none
    pub fn images(&self, product_id: &str) -> Vec<String> {
        self.sets
            .get(product_id)
            .map(|set| set.urls.clone())
            .unwrap_or_default()
    }

    /// Whether a resolution attempt (success or failure) has completed
    pub fn is_loaded(&self, product_id: &str) -> bool {
        self.sets.contains_key(product_id)
    }

    pub fn current_index(&self, product_id: &str) -> usize {
        self.sets.get(product_id).map(|set| set.index).unwrap_or(0)
    }

    /// Whether the product has enough images to page through
    pub fn has_carousel(&self, product_id: &str) -> bool {
        self.sets
            .get(product_id)
            .map(|set| set.urls.len() >= 2)
            .unwrap_or(false)
    }

    /// Advance the carousel, wrapping from the last image to the first
    pub fn step_next(&self, product_id: &str) {
        if let Some(mut set) = self.sets.get_mut(product_id) {
            let len = set.urls.len();
            if len > 1 {
                set.index = (set.index + 1) % len;
            }
        }
    }

    /// Step back, wrapping from the first image to the last
    pub fn step_previous(&self, product_id: &str) {
        if let Some(mut set) = self.sets.get_mut(product_id) {
            let len = set.urls.len();
            if len > 1 {
                set.index = (set.index + len - 1) % len;
            }
        }
    }
}
