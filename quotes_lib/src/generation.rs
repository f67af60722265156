//! Latest-request-wins bookkeeping for views that refetch on user input.

use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one dispatched request within a [`RequestGenerations`] counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Hands out increasing tickets and tells whether a ticket is still the newest.
///
/// A view calls [`begin`](Self::begin) before each fetch and passes the
/// response through [`accept`](Self::accept). Responses for tickets that
/// were superseded are dropped so a slow earlier request cannot overwrite
/// newer state.
#[derive(Debug, Default)]
pub struct RequestGenerations {
    latest: AtomicU64,
}

impl RequestGenerations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the ticket for a new request, superseding every earlier one.
    pub fn begin(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_latest(&self, ticket: &RequestTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Returns `value` if `ticket` is still the newest request, otherwise drops it.
    pub fn accept<T>(&self, ticket: RequestTicket, value: T) -> Option<T> {
        if self.is_latest(&ticket) {
            Some(value)
        } else {
            tracing::debug!(
                "Dropping stale response for request {} (latest {})",
                ticket.0,
                self.latest.load(Ordering::SeqCst)
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn newest_ticket_is_accepted() {
        let generations = RequestGenerations::new();
        let ticket = generations.begin();
        assert!(generations.is_latest(&ticket));
        assert_eq!(generations.accept(ticket, "page 1"), Some("page 1"));
    }

    #[test]
    fn superseded_ticket_is_dropped() {
        let generations = RequestGenerations::new();
        let first = generations.begin();
        let second = generations.begin();
        assert_eq!(generations.accept(first, 1), None);
        assert_eq!(generations.accept(second, 2), Some(2));
    }

    #[tokio::test]
    async fn slow_earlier_response_cannot_overwrite_newer_state() {
        let generations = RequestGenerations::new();
        let mut shown: Option<&str> = None;

        let slow = generations.begin();
        let fast = generations.begin();

        let fast_resp = async {
            tokio::time::sleep(Duration::from_millis(5)).await;
            "page 3"
        };
        let slow_resp = async {
            tokio::time::sleep(Duration::from_millis(30)).await;
            "page 2"
        };
        let (fast_value, slow_value) = tokio::join!(fast_resp, slow_resp);

        if let Some(v) = generations.accept(fast, fast_value) {
            shown = Some(v);
        }
        if let Some(v) = generations.accept(slow, slow_value) {
            shown = Some(v);
        }
        assert_eq!(shown, Some("page 3"));
    }
}
