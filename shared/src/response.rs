//! API response envelopes
//!
//! Wire structures returned by the storefront backend. The backend is a
//! Spring-style service, so paginated listings arrive in its page
//! envelope with camelCase keys.

use serde::{Deserialize, Serialize};

/// One page of a server-side paginated listing
///
/// ```json
/// {
///     "content": [ ... ],
///     "totalPages": 3,
///     "totalElements": 45
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Items on this page
    pub content: Vec<T>,
    /// Total number of pages for the query
    pub total_pages: u32,
    /// Total number of items across all pages
    pub total_elements: u64,
}

impl<T> Page<T> {
    /// Create a page with no content
    pub fn empty() -> Self {
        Self {
            content: Vec::new(),
            total_pages: 0,
            total_elements: 0,
        }
    }

    /// Build a page from an already-filtered full result set
    pub fn of(content: Vec<T>, total_pages: u32, total_elements: u64) -> Self {
        Self {
            content,
            total_pages,
            total_elements,
        }
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}
