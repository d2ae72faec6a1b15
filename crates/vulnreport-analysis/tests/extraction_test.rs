//! Extraction tests: field resolution, defaults, coercion and structural absence.

mod common;

use vulnreport_analysis::document::XmlDocument;
use vulnreport_analysis::extraction::fields::{
    ASSET_FIELDS, FINDING_FIELDS, METADATA_FIELDS, PLUGIN_PREFERENCE_FIELDS, POLICY_INFO_FIELDS,
    SERVER_PREFERENCE_FIELDS,
};
use vulnreport_analysis::extraction::{extract_str, Extractor};
use vulnreport_core::config::ExtractionConfig;
use vulnreport_core::errors::ParseError;
use vulnreport_core::types::FieldRecord;
use vulnreport_core::{DiagnosticEvent, EventDispatcher, Severity};

use common::{collecting, FULL_REPORT, SCENARIO_C};

fn extract_full() -> vulnreport_core::types::ExtractedReport {
    extract_str(FULL_REPORT, &ExtractionConfig::default(), &EventDispatcher::new()).unwrap()
}

#[test]
fn test_metadata_uses_first_host_times() {
    let report = extract_full();
    assert_eq!(report.metadata.len(), 1);
    let meta = &report.metadata[0];
    assert_eq!(meta.scan_name.as_deref(), Some("Weekly Scan"));
    assert_eq!(meta.scan_start.as_deref(), Some("Tue Jan 2 10:00:00 2024"));
    assert_eq!(meta.scan_end.as_deref(), Some("Tue Jan 2 11:00:00 2024"));
    assert_eq!(meta.policy_name.as_deref(), Some("Internal Audit"));
}

#[test]
fn test_assets_one_per_host() {
    let report = extract_full();
    assert_eq!(report.assets.len(), 2);

    let web = &report.assets[0];
    assert_eq!(web.ip.as_deref(), Some("10.0.0.1"));
    assert_eq!(web.hostname.as_deref(), Some("WEB01"));
    assert_eq!(web.os.as_deref(), Some("Microsoft Windows Server 2019"));
    assert_eq!(web.mac_address.as_deref(), Some("00:11:22:33:44:55"));
    assert_eq!(web.fqdn.as_deref(), Some("web01.example.com"));
    assert_eq!(web.system_type.as_deref(), Some("general-purpose"));
    assert_eq!(web.network.as_deref(), Some("10.0.0.0/24"));

    let linux = &report.assets[1];
    assert_eq!(linux.os.as_deref(), Some("Linux Kernel 5.4"));
    assert_eq!(linux.hostname, None);
    assert_eq!(linux.fqdn, None);
}

#[test]
fn test_findings_in_document_order_with_full_fields() {
    let report = extract_full();
    let plugins: Vec<&str> = report
        .findings
        .iter()
        .map(|f| f.plugin_id.as_deref().unwrap())
        .collect();
    assert_eq!(plugins, vec!["97833", "97833", "19506", "21156", "70658", "42873"]);

    let ms17 = &report.findings[0];
    assert_eq!(ms17.asset_ip.as_deref(), Some("10.0.0.1"));
    assert_eq!(ms17.severity, Severity::Critical);
    assert_eq!(ms17.port, Some(445));
    assert_eq!(ms17.protocol.as_deref(), Some("tcp"));
    assert_eq!(ms17.service_name.as_deref(), Some("cifs"));
    assert_eq!(ms17.cvss_base_score, Some(10.0));
    assert_eq!(ms17.cvss3_base_score, Some(8.1));
    assert_eq!(ms17.exploit.available, Some(true));
    assert_eq!(ms17.exploit.metasploit, Some(true));
    assert_eq!(ms17.exploit.canvas, Some(false));
    assert_eq!(ms17.exploit.core, None);
    assert!(ms17.exploit.any_available());
    assert_eq!(ms17.dates.patch_publication.as_deref(), Some("2017/03/14"));
    assert_eq!(ms17.references.cve, vec!["CVE-2017-0143", "CVE-2017-0144"]);
    assert_eq!(ms17.references.bid, vec!["96703"]);
    assert_eq!(ms17.references.see_also, vec!["https://example.com/ms17-010"]);
    assert_eq!(ms17.plugin_output.as_deref(), Some("Host is vulnerable & unpatched"));
    assert!(ms17.compliance.is_none());

    let linux = &report.findings[4];
    assert_eq!(linux.asset_ip.as_deref(), Some("10.0.0.2"));
    assert_eq!(linux.severity, Severity::Medium);
}

#[test]
fn test_compliance_fields_extracted() {
    let report = extract_full();
    let check = report.findings[3].compliance.as_ref().expect("compliance block");
    assert_eq!(check.check_name.as_deref(), Some("1.1 Password history"));
    assert_eq!(check.result.as_deref(), Some("FAILED"));
    assert_eq!(check.policy_value.as_deref(), Some("24"));
    assert_eq!(check.audit_file, None);
}

#[test]
fn test_extraction_config_drops_optional_payloads() {
    let config = ExtractionConfig {
        include_plugin_output: Some(false),
        include_compliance: Some(false),
    };
    let report = extract_str(FULL_REPORT, &config, &EventDispatcher::new()).unwrap();
    assert!(report.findings.iter().all(|f| f.plugin_output.is_none()));
    assert!(report.findings.iter().all(|f| f.compliance.is_none()));
}

#[test]
fn test_policy_records() {
    let report = extract_full();
    assert_eq!(report.policy.info.len(), 1);
    assert_eq!(report.policy.policy_name(), Some("Internal Audit"));
    assert_eq!(report.policy.info[0].policy_comment.as_deref(), Some("Quarterly sweep"));

    let names: Vec<&str> = report
        .policy
        .server_preferences
        .iter()
        .map(|p| p.name.as_deref().unwrap())
        .collect();
    assert_eq!(names, vec!["max_hosts", "safe_checks"]);

    let plugin = &report.policy.plugin_preferences[0];
    assert_eq!(plugin.plugin_id.as_deref(), Some("10180"));
    assert_eq!(plugin.preference_type.as_deref(), Some("checkbox"));
    assert_eq!(plugin.selected_value.as_deref(), Some("yes"));
}

#[test]
fn test_missing_policy_yields_empty_collections() {
    let (collector, dispatcher) = collecting();
    let doc = r#"<NessusClientData_v2><Report name="r"><ReportHost name="h"/></Report></NessusClientData_v2>"#;
    let report = extract_str(doc, &ExtractionConfig::default(), &dispatcher).unwrap();

    assert!(report.policy.is_empty());
    assert_eq!(report.assets.len(), 1);
    let absent: Vec<&'static str> = collector
        .events()
        .iter()
        .filter_map(|e| match e {
            DiagnosticEvent::StructuralAbsence(a) => Some(a.container),
            _ => None,
        })
        .collect();
    assert_eq!(absent, vec!["Policy", "HostProperties"]);
}

#[test]
fn test_missing_report_container_is_not_an_error() {
    let (collector, dispatcher) = collecting();
    let report = extract_str("<Other/>", &ExtractionConfig::default(), &dispatcher).unwrap();

    assert_eq!(report.metadata.len(), 1);
    assert_eq!(report.metadata[0].scan_name, None);
    assert!(report.assets.is_empty());
    assert!(report.findings.is_empty());
    assert!(report.policy.is_empty());
    assert_eq!(collector.count_kind("structural_absence"), 3);
    assert_eq!(collector.count_kind("extraction_complete"), 1);
}

#[test]
fn test_severity_coercion() {
    let (collector, dispatcher) = collecting();
    let doc = r#"<NessusClientData_v2><Report name="r"><ReportHost name="h">
        <ReportItem pluginID="1" severity="critical"><description>d</description></ReportItem>
        <ReportItem pluginID="2" severity="9"><description>d</description></ReportItem>
        <ReportItem pluginID="3"><description>d</description></ReportItem>
        <ReportItem pluginID="4" severity=" 3 " port="http"><description>d</description></ReportItem>
    </ReportHost></Report></NessusClientData_v2>"#;
    let report = extract_str(doc, &ExtractionConfig::default(), &dispatcher).unwrap();

    let severities: Vec<Severity> = report.findings.iter().map(|f| f.severity).collect();
    assert_eq!(
        severities,
        vec![Severity::Info, Severity::Info, Severity::Info, Severity::High]
    );
    assert_eq!(report.findings[3].port, None);

    let coerced: Vec<&'static str> = collector
        .events()
        .iter()
        .filter_map(|e| match e {
            DiagnosticEvent::FieldCoercion(c) => Some(c.field),
            _ => None,
        })
        .collect();
    assert_eq!(coerced, vec!["severity", "severity", "port"]);
}

#[test]
fn test_present_but_empty_differs_from_absent() {
    let doc = r#"<NessusClientData_v2><Report name="r"><ReportHost name="h">
        <ReportItem pluginID="1"><description></description><solution/></ReportItem>
    </ReportHost></Report></NessusClientData_v2>"#;
    let report = extract_str(doc, &ExtractionConfig::default(), &EventDispatcher::new()).unwrap();
    let finding = &report.findings[0];
    assert_eq!(finding.description.as_deref(), Some(""));
    assert_eq!(finding.solution.as_deref(), Some(""));
    assert_eq!(finding.synopsis, None);
}

#[test]
fn test_field_text_is_kept_verbatim() {
    let doc = "<NessusClientData_v2><Report name=\"r\"><ReportHost name=\"h\">\n\
        <ReportItem pluginID=\"1\">\
        <plugin_output>\n  Port 80/tcp open\n  Port 443/tcp open\n</plugin_output>\
        <description>a <!-- c --> b</description>\
        </ReportItem>\n\
        </ReportHost></Report></NessusClientData_v2>";
    let report = extract_str(doc, &ExtractionConfig::default(), &EventDispatcher::new()).unwrap();
    let finding = &report.findings[0];
    assert_eq!(
        finding.plugin_output.as_deref(),
        Some("\n  Port 80/tcp open\n  Port 443/tcp open\n")
    );
    assert_eq!(finding.description.as_deref(), Some("a  b"));
}

#[test]
fn test_malformed_document_is_a_parse_error() {
    let err = extract_str(SCENARIO_C, &ExtractionConfig::default(), &EventDispatcher::new())
        .unwrap_err();
    assert!(matches!(
        err,
        ParseError::Malformed { .. } | ParseError::UnexpectedEof { .. }
    ));
}

#[test]
fn test_per_collection_entry_points() {
    let doc = XmlDocument::parse(FULL_REPORT).unwrap();
    let dispatcher = EventDispatcher::new();
    let config = ExtractionConfig::default();
    let extractor = Extractor::new(&config, &dispatcher);

    assert_eq!(extractor.extract_metadata(&doc).len(), 1);
    assert_eq!(extractor.extract_assets(&doc).len(), 2);
    assert_eq!(extractor.extract_findings(&doc).len(), 6);
    assert_eq!(extractor.extract_policy(&doc).server_preferences.len(), 2);
    assert_eq!(extractor.extract(&doc), extract_full());
}

#[test]
fn test_every_declared_field_is_known_to_its_record() {
    let report = extract_full();
    for spec in ASSET_FIELDS.specs {
        assert!(report.assets[0].has_value(spec.name), "asset field {}", spec.name);
    }
    for spec in POLICY_INFO_FIELDS.specs {
        assert!(report.policy.info[0].has_value(spec.name), "policy field {}", spec.name);
    }
    for spec in SERVER_PREFERENCE_FIELDS.specs {
        assert!(report.policy.server_preferences[0].has_value(spec.name));
    }
    for spec in PLUGIN_PREFERENCE_FIELDS.specs {
        assert!(report.policy.plugin_preferences[0].has_value(spec.name));
    }
    // exploit_framework_core is the one field the fixture leaves out.
    for spec in FINDING_FIELDS.specs.iter().filter(|s| s.name != "exploit_framework_core") {
        assert!(report.findings[0].has_value(spec.name), "finding field {}", spec.name);
    }
    for spec in METADATA_FIELDS.specs.iter().filter(|s| s.name != "policy_used") {
        assert!(report.metadata[0].has_value(spec.name), "metadata field {}", spec.name);
    }
}
