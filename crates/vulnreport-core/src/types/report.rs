//! The four record collections produced from one document.

use serde::{Deserialize, Serialize};

use super::{Asset, Finding, PolicyRecords, ScanMetadata};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExtractedReport {
    /// Exactly one entry after extraction.
    pub metadata: Vec<ScanMetadata>,
    pub assets: Vec<Asset>,
    pub findings: Vec<Finding>,
    pub policy: PolicyRecords,
}

impl ExtractedReport {
    pub fn scan_metadata(&self) -> Option<&ScanMetadata> {
        self.metadata.first()
    }
}
