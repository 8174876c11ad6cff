// ============================================================================
// Event Handler Interface
// Defines the contract for observing solve requests
// ============================================================================

use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted while a request is solved
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SolveEvent {
    /// Request accepted by the solver
    RequestReceived {
        kind: String,
        components: usize,
        timestamp: DateTime<Utc>,
    },

    /// A candidate sub-mix was considered and dropped
    CandidateDiscarded {
        label: String,
        reason: String,
        timestamp: DateTime<Utc>,
    },

    /// A feasible solution was produced
    SolutionFound {
        label: String,
        ratio: String,
        timestamp: DateTime<Utc>,
    },

    /// Request finished successfully
    RequestSolved {
        kind: String,
        solutions: usize,
        timestamp: DateTime<Utc>,
    },

    /// Request failed
    RequestRejected {
        kind: String,
        reason: String,
        timestamp: DateTime<Utc>,
    },
}

/// Event handler trait for observing the solver
/// Implementations can handle logging, metrics, auditing, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a solve event
    fn on_event(&self, event: SolveEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<SolveEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: SolveEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: SolveEvent) {
        tracing::debug!("Mixture solver event: {:?}", event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Recorder(Mutex<Vec<SolveEvent>>);

    impl EventHandler for Recorder {
        fn on_event(&self, event: SolveEvent) {
            self.0.lock().unwrap().push(event);
        }
    }

    #[test]
    fn test_noop_handler() {
        let handler = NoOpEventHandler;
        handler.on_event(SolveEvent::RequestReceived {
            kind: "simple".to_string(),
            components: 2,
            timestamp: Utc::now(),
        });
        // Should not panic
    }

    #[test]
    fn test_batch_delivery_preserves_order() {
        let recorder = Recorder(Mutex::new(Vec::new()));
        let now = Utc::now();
        recorder.on_events(vec![
            SolveEvent::CandidateDiscarded {
                label: "A + B".to_string(),
                reason: "infeasible_range".to_string(),
                timestamp: now,
            },
            SolveEvent::SolutionFound {
                label: "A + C".to_string(),
                ratio: "1 : 3".to_string(),
                timestamp: now,
            },
        ]);

        let events = recorder.0.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], SolveEvent::CandidateDiscarded { .. }));
        assert!(matches!(events[1], SolveEvent::SolutionFound { .. }));
    }
}
