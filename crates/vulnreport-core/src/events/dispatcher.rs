//! EventDispatcher — synchronous event dispatch, near zero cost when empty.

use std::sync::Arc;

use super::handler::DiagnosticsHandler;
use super::types::DiagnosticEvent;

/// Synchronous dispatcher wrapping a list of handlers.
#[derive(Clone, Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn DiagnosticsHandler>>,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Create a dispatcher with a single handler registered.
    pub fn with_handler(handler: Arc<dyn DiagnosticsHandler>) -> Self {
        let mut dispatcher = Self::new();
        dispatcher.register(handler);
        dispatcher
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn DiagnosticsHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Deliver an event to every registered handler.
    /// A panicking handler does not prevent later handlers from receiving it.
    pub fn record(&self, event: &DiagnosticEvent) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                handler.record(event);
            }));
            if result.is_err() {
                tracing::warn!(event = event.kind(), "diagnostics handler panicked");
            }
        }
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
