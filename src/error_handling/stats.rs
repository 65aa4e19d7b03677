//! Service statistics tracking.
//!
//! Thread-safe counters for accepted and rejected location updates and for
//! every metadata outcome, including the failures hidden behind fallbacks.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;
use strum::IntoEnumIterator;

use super::types::EventType;

/// Thread-safe event counters.
///
/// All event types are initialized to zero on creation, so lookups never miss.
/// Share across handlers with `Arc`.
pub struct ServiceStats {
    events: HashMap<EventType, AtomicUsize>,
    started: Instant,
}

impl ServiceStats {
    pub fn new() -> Self {
        let mut events = HashMap::new();
        for event in EventType::iter() {
            events.insert(event, AtomicUsize::new(0));
        }

        ServiceStats {
            events,
            started: Instant::now(),
        }
    }

    /// Increment an event counter.
    pub fn record(&self, event: EventType) {
        if let Some(counter) = self.events.get(&event) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to record {:?} which is not in the map. \
                 This indicates a bug in ServiceStats initialization.",
                event
            );
        }
    }

    pub fn count(&self, event: EventType) -> usize {
        self.events
            .get(&event)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Number of metadata failures replaced by the fallback fragment.
    pub fn total_swallowed(&self) -> usize {
        EventType::iter()
            .filter(EventType::is_swallowed)
            .map(|e| self.count(e))
            .sum()
    }

    pub fn uptime_seconds(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }
}

impl Default for ServiceStats {
    fn default() -> Self {
        Self::new()
    }
}
