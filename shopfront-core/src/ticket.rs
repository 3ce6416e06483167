//! Fetch tickets for stale-response discarding
//!
//! Every refresh draws a ticket; a response is applied only while its ticket
//! is still the latest issued, so an out-of-order completion can never
//! overwrite newer state.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic ticket counter for one listing
#[derive(Debug, Default)]
pub struct RequestTickets {
    latest: AtomicU64,
}

impl RequestTickets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the next ticket, superseding all earlier ones
    pub fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether a ticket is still the latest issued
    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_ticket_supersedes_older() {
        let tickets = RequestTickets::new();
        let first = tickets.issue();
        assert!(tickets.is_current(first));

        let second = tickets.issue();
        assert!(!tickets.is_current(first));
        assert!(tickets.is_current(second));
    }
}
