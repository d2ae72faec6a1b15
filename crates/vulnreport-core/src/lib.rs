//! vulnreport-core: records, severity, errors, configuration, diagnostics
//! events and tracing shared by the extraction and metrics engine.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod types;

pub use config::VulnReportConfig;
pub use errors::ErrorCode;
pub use events::{DiagnosticEvent, DiagnosticsHandler, EventDispatcher};
pub use types::{
    Asset, ComplianceCheck, Finding, PluginPreference, PolicyInfo, ScanMetadata,
    ServerPreference, Severity,
};
