//! Document-level scan metadata.

use serde::{Deserialize, Serialize};

use super::record::{FieldRecord, RecordKind};

/// One per document. Scan start/end come from the first host's properties,
/// since the report carries no scan-level timestamp.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScanMetadata {
    #[serde(with = "super::sentinel", default)]
    pub scan_name: Option<String>,
    #[serde(with = "super::sentinel", default)]
    pub scan_start: Option<String>,
    #[serde(with = "super::sentinel", default)]
    pub scan_end: Option<String>,
    #[serde(with = "super::sentinel", default)]
    pub policy_name: Option<String>,
}

impl FieldRecord for ScanMetadata {
    const KIND: RecordKind = RecordKind::Metadata;

    fn has_value(&self, field: &str) -> bool {
        match field {
            "scan_name" => self.scan_name.is_some(),
            "scan_start" => self.scan_start.is_some(),
            "scan_end" => self.scan_end.is_some(),
            "policy_name" => self.policy_name.is_some(),
            _ => false,
        }
    }
}
