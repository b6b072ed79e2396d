//! Debounced, single-flight city search.
//!
//! Pure state machine over caller-supplied timestamps: the UI reports every
//! query edit with `on_query_changed`, polls `due` on its tick, dispatches
//! the returned request on its own thread, and drops any arriving result
//! whose token [`SearchDebouncer::is_current`] rejects. At most one request
//! is considered live at a time; each dispatch invalidates the previous one.

use log::debug;

/// Quiet period after the last edit before a search is dispatched.
pub const DEBOUNCE_MILLIS: u64 = 300;

/// Identifies one dispatched search; stale tokens are rejected on arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// A search the caller should now perform.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub query: String,
    pub token: RequestToken,
}

#[derive(Debug, Default)]
pub struct SearchDebouncer {
    /// Query text waiting out the quiet period, with its due time.
    pending: Option<(String, u64)>,
    /// Last query actually dispatched, for de-duplication.
    last_dispatched: Option<String>,
    /// Bumped on every dispatch and every cancellation; a token is current
    /// iff it carries the latest generation.
    generation: u64,
}

impl SearchDebouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a query edit at `now_ms`. Whitespace-only input clears any
    /// pending dispatch and invalidates the in-flight request.
    pub fn on_query_changed(&mut self, query: &str, now_ms: u64) {
        let query = query.trim();
        if query.is_empty() {
            self.pending = None;
            self.last_dispatched = None;
            self.generation += 1;
            return;
        }
        self.pending = Some((query.to_owned(), now_ms + DEBOUNCE_MILLIS));
    }

    /// Poll at `now_ms`; returns the request to dispatch when the quiet
    /// period has elapsed. A query equal to the last dispatched one is
    /// swallowed rather than re-sent.
    pub fn due(&mut self, now_ms: u64) -> Option<SearchRequest> {
        let (query, due_at) = self.pending.as_ref()?;
        if now_ms < *due_at {
            return None;
        }
        let query = query.clone();
        self.pending = None;
        if self.last_dispatched.as_deref() == Some(query.as_str()) {
            return None;
        }
        self.generation += 1;
        self.last_dispatched = Some(query.clone());
        debug!("dispatching search `{query}` (generation {})", self.generation);
        Some(SearchRequest {
            query,
            token: RequestToken(self.generation),
        })
    }

    /// Whether a dispatched request is still the latest one; results with a
    /// stale token must be discarded.
    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.generation
    }

    /// Drop all pending and in-flight work.
    pub fn reset(&mut self) {
        self.pending = None;
        self.last_dispatched = None;
        self.generation += 1;
    }
}
