//! Latest-wins request sequencing.
//!
//! Informational fetches (slippage, prices, position) are fired on every input
//! change with no cancellation, so responses can resolve out of order. Each
//! request takes a ticket when it is issued; when its response lands it is
//! applied only if no newer request has been issued since.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

/// Cheap to clone; clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    latest: Arc<AtomicU64>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket for a request about to be sent. Invalidates all earlier tickets.
    pub fn issue(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// `Some(value)` if `ticket` is still the latest, `None` if it went stale.
    pub fn accept<T>(&self, ticket: RequestTicket, value: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(value)
        } else {
            tracing::debug!(ticket = ticket.0, "discarding stale response");
            None
        }
    }
}
