//! Record types produced by extraction and consumed by validation and metrics.
//!
//! Every optional scalar on a record carries
//! `#[serde(with = "super::sentinel", default)]`, so absence round-trips as
//! `"N/A"`. Nested optional blocks (a finding's compliance check) are
//! skipped instead.

pub mod asset;
pub mod finding;
pub mod metadata;
pub mod policy;
pub mod record;
pub mod report;
pub mod sentinel;
pub mod severity;

pub use asset::Asset;
pub use finding::{ComplianceCheck, DedupKey, ExploitInfo, Finding, FindingIdentity, PluginDates, References};
pub use metadata::ScanMetadata;
pub use policy::{PluginPreference, PolicyInfo, PolicyRecords, ServerPreference};
pub use record::{FieldRecord, RecordKind};
pub use report::ExtractedReport;
pub use severity::Severity;
