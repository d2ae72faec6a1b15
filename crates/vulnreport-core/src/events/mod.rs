//! Diagnostics event system for vulnreport.
//! Trait with no-op defaults, synchronous dispatch, passed explicitly into
//! every stage; there is no process-wide diagnostics state.

pub mod collecting;
pub mod dispatcher;
pub mod handler;
pub mod tracing_handler;
pub mod types;

pub use collecting::CollectingHandler;
pub use dispatcher::EventDispatcher;
pub use handler::DiagnosticsHandler;
pub use tracing_handler::TracingHandler;
pub use types::DiagnosticEvent;
