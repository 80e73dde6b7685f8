//! Cache Events Module
//!
//! Structured notifications emitted by the cache, decoupled from any logging
//! backend. The binary wires a listener that forwards events to `tracing`;
//! embedders can plug in anything else (or nothing).

// == Cache Event ==
/// A structured event emitted by the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheEvent {
    /// The cache was constructed with the given limits.
    Constructed {
        fast_capacity: usize,
        secondary_budget_bytes: usize,
    },
    /// An entry was permanently discarded to stay within the secondary
    /// tier's byte budget.
    Evicted { key: u64, size_bytes: usize },
}

// == Event Listener ==
/// Callback invoked synchronously for every [`CacheEvent`].
pub type EventListener = Box<dyn Fn(&CacheEvent) + Send + Sync>;

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_listener_receives_events() {
        let seen: Arc<Mutex<Vec<CacheEvent>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let listener: EventListener = Box::new(move |event| {
            sink.lock().unwrap().push(event.clone());
        });

        let event = CacheEvent::Evicted {
            key: 9,
            size_bytes: 128,
        };
        listener(&event);

        let recorded = seen.lock().unwrap();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0], event);
    }
}
