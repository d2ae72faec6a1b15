use vulnreport_core::types::ScanMetadata;

use super::fields::METADATA_FIELDS;
use crate::document::XmlElement;

/// Exactly one metadata record per document. Every field may be absent.
pub(crate) fn extract_metadata(
    report: Option<&XmlElement>,
    first_host: Option<&XmlElement>,
    policy: Option<&XmlElement>,
) -> ScanMetadata {
    let from_host = |field: &str| first_host.and_then(|h| METADATA_FIELDS.resolve(field, h));

    ScanMetadata {
        scan_name: report.and_then(|r| METADATA_FIELDS.resolve("scan_name", r)),
        scan_start: from_host("scan_start"),
        scan_end: from_host("scan_end"),
        policy_name: policy
            .and_then(|p| METADATA_FIELDS.resolve("policy_name", p))
            .or_else(|| from_host("policy_used")),
    }
}
