//! Tests for record types: identity, field presence and sentinel serialization.

use vulnreport_core::types::{
    Asset, DedupKey, ExtractedReport, FieldRecord, Finding, PolicyInfo, PolicyRecords,
    ScanMetadata, Severity,
};

fn finding(port: u16, protocol: &str) -> Finding {
    Finding {
        plugin_id: Some("19506".into()),
        asset_ip: Some("10.0.0.1".into()),
        port: Some(port),
        protocol: Some(protocol.into()),
        ..Default::default()
    }
}

#[test]
fn test_identity_distinguishes_ports_dedup_key_does_not() {
    let http = finding(80, "tcp");
    let https = finding(443, "tcp");

    assert_ne!(http.identity(), https.identity());
    assert_eq!(http.dedup_key(), https.dedup_key());
    assert_eq!(
        http.dedup_key(),
        DedupKey {
            plugin_id: Some("19506"),
            asset_ip: Some("10.0.0.1"),
        }
    );
}

#[test]
fn test_has_value_tracks_resolution_not_content() {
    let mut f = Finding::default();
    assert!(!f.has_value("description"));
    f.description = Some(String::new());
    assert!(f.has_value("description"));
    assert!(f.has_value("severity"));
    assert!(!f.has_value("no_such_field"));

    let asset = Asset::with_ip("10.0.0.7");
    assert!(asset.has_value("asset_ip"));
    assert!(!asset.has_value("hostname"));
}

#[test]
fn test_absent_fields_serialize_as_sentinel() {
    let asset = Asset::with_ip("10.0.0.7");
    let value = serde_json::to_value(&asset).unwrap();
    assert_eq!(value["asset_ip"], "10.0.0.7");
    assert_eq!(value["hostname"], "N/A");

    let back: Asset = serde_json::from_value(value).unwrap();
    assert_eq!(back, asset);
}

#[test]
fn test_every_absent_metadata_field_is_sentinel() {
    let value = serde_json::to_value(ScanMetadata::default()).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 4);
    for (key, field) in object {
        assert_eq!(field, "N/A", "metadata field {key}");
    }
    let back: ScanMetadata = serde_json::from_value(value).unwrap();
    assert_eq!(back, ScanMetadata::default());
}

#[test]
fn test_severity_serializes_as_integer() {
    let f = Finding {
        severity: Severity::High,
        ..Default::default()
    };
    let value = serde_json::to_value(&f).unwrap();
    assert_eq!(value["severity"], 3);
    assert!(value.get("compliance").is_none());

    let bad = serde_json::json!({ "severity": 9 });
    assert!(serde_json::from_value::<Finding>(bad).is_err());
}

#[test]
fn test_report_accessors() {
    let report = ExtractedReport {
        metadata: vec![ScanMetadata {
            scan_name: Some("weekly".into()),
            ..Default::default()
        }],
        policy: PolicyRecords {
            info: vec![PolicyInfo {
                policy_name: Some("Basic".into()),
                policy_comment: None,
            }],
            ..Default::default()
        },
        ..Default::default()
    };
    assert_eq!(
        report.scan_metadata().and_then(|m| m.scan_name.as_deref()),
        Some("weekly")
    );
    assert_eq!(report.policy.policy_name(), Some("Basic"));
    assert!(report.assets.is_empty() && report.findings.is_empty());
    assert!(!report.policy.is_empty());
}
