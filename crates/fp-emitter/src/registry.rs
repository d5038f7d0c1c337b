//! Registry<L> — the event-name → listener-queue mapping.
//!
//! The registry only stores and filters entries; it never invokes them.
//! Callers that dispatch (the typed [`Emitter`](crate::Emitter) and the JS
//! binding) take a [`snapshot`](Registry::snapshot) and call the entries
//! after releasing whatever lock guards the registry.
//!
//! Invariant: no key ever maps to an empty queue. Every operation that could
//! leave a queue empty removes the key instead, so "key present" always means
//! "at least one stored entry".

use std::collections::HashMap;

use crate::listener::Callback;

/// Ordered, duplicate-permitting listener queues keyed by event name.
#[derive(Debug)]
pub struct Registry<L> {
    events: HashMap<String, Vec<L>>,
}

impl<L> Registry<L> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            events: HashMap::new(),
        }
    }

    /// Append `listener` to the queue for `event`, creating the queue if
    /// needed. Returns the queue length after insertion.
    pub fn add(&mut self, event: &str, listener: L) -> usize {
        let queue = self.events.entry(event.to_owned()).or_default();
        queue.push(listener);
        queue.len()
    }

    /// Drop every entry for `event`. Returns `false` if it had none.
    pub fn clear(&mut self, event: &str) -> bool {
        match self.events.remove(event) {
            Some(queue) => {
                tracing::debug!(event, listeners = queue.len(), "cleared event");
                true
            }
            None => false,
        }
    }

    /// Drop every entry for every event.
    pub fn clear_all(&mut self) {
        if !self.events.is_empty() {
            tracing::debug!(events = self.events.len(), "cleared all events");
        }
        self.events.clear();
    }

    /// Number of entries stored for `event`.
    pub fn listener_count(&self, event: &str) -> usize {
        self.events.get(event).map_or(0, Vec::len)
    }

    /// Names of all events with stored entries, sorted.
    pub fn event_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.events.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// `true` when no event has stored entries.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<L: Callback> Registry<L> {
    /// Remove every entry identical to `listener` from the queue for `event`.
    ///
    /// Only acts when at least one callable entry matches. The rebuilt queue
    /// keeps entries that are callable and not identical to `listener`, so
    /// non-callable entries are purged alongside the match. When nothing
    /// matches the queue is left untouched, garbage included, and `false` is
    /// returned.
    pub fn remove(&mut self, event: &str, listener: &L) -> bool {
        let Some(queue) = self.events.get_mut(event) else {
            return false;
        };
        if !queue
            .iter()
            .any(|entry| entry.is_callable() && entry.same(listener))
        {
            return false;
        }

        let (mut removed, mut purged) = (0usize, 0usize);
        queue.retain(|entry| {
            if !entry.is_callable() {
                purged += 1;
                false
            } else if entry.same(listener) {
                removed += 1;
                false
            } else {
                true
            }
        });
        tracing::debug!(event, removed, purged, "removed listener");

        if queue.is_empty() {
            self.events.remove(event);
        }
        true
    }
}

impl<L: Clone> Registry<L> {
    /// Copy of the queue for `event` in registration order (empty if none).
    pub fn snapshot(&self, event: &str) -> Vec<L> {
        self.events.get(event).cloned().unwrap_or_default()
    }
}

impl<L> Default for Registry<L> {
    fn default() -> Self {
        Self::new()
    }
}
