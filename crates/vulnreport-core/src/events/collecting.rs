//! Handler that keeps every event it receives.

use std::sync::Mutex;

use super::handler::DiagnosticsHandler;
use super::types::DiagnosticEvent;

#[derive(Debug, Default)]
pub struct CollectingHandler {
    events: Mutex<Vec<DiagnosticEvent>>,
}

impl CollectingHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events received so far, in arrival order.
    pub fn events(&self) -> Vec<DiagnosticEvent> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn count_kind(&self, kind: &str) -> usize {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .iter()
            .filter(|e| e.kind() == kind)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .iter()
            .filter(|e| e.is_warning())
            .count()
    }
}

impl DiagnosticsHandler for CollectingHandler {
    fn record(&self, event: &DiagnosticEvent) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(event.clone());
    }
}
