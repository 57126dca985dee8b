//! Bounded in-memory log of fallback transitions.

use std::collections::VecDeque;
use std::sync::Mutex;

use careerlens_core::constants::MAX_DEGRADATION_EVENTS;
use careerlens_core::models::DegradationEvent;
use tracing::info;

/// Oldest events are dropped once the log is full.
#[derive(Debug)]
pub struct DegradationLog {
    events: Mutex<VecDeque<DegradationEvent>>,
    capacity: usize,
}

impl Default for DegradationLog {
    fn default() -> Self {
        Self::with_capacity(MAX_DEGRADATION_EVENTS)
    }
}

impl DegradationLog {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    pub fn record(&self, event: DegradationEvent) {
        info!(
            component = %event.component,
            fallback = %event.fallback_used,
            "degradation recorded"
        );
        // A poisoned log is still a valid queue of events.
        let mut events = self.events.lock().unwrap_or_else(|p| p.into_inner());
        if events.len() == self.capacity {
            events.pop_front();
        }
        if self.capacity > 0 {
            events.push_back(event);
        }
    }

    /// All retained events, oldest first.
    pub fn events(&self) -> Vec<DegradationEvent> {
        let events = self.events.lock().unwrap_or_else(|p| p.into_inner());
        events.iter().cloned().collect()
    }
}
