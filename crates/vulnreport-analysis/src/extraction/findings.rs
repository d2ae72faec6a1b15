use vulnreport_core::config::ExtractionConfig;
use vulnreport_core::types::{
    ComplianceCheck, ExploitInfo, Finding, PluginDates, RecordKind, References,
};
use vulnreport_core::EventDispatcher;

use super::coerce::Coercer;
use super::fields::{COMPLIANCE_FIELDS, FINDING_FIELDS};
use crate::document::XmlElement;

/// Build one finding from a plugin result element. The asset IP is inherited
/// from the owning host.
pub(crate) fn extract_finding(
    item: &XmlElement,
    asset_ip: Option<&str>,
    config: &ExtractionConfig,
    dispatcher: &EventDispatcher,
) -> Finding {
    let field = |name: &str| FINDING_FIELDS.resolve(name, item);
    let list = |name: &str| FINDING_FIELDS.resolve_all(name, item);
    let coerce = Coercer::new(dispatcher, RecordKind::Finding, asset_ip);

    Finding {
        asset_ip: asset_ip.map(str::to_string),
        plugin_id: field("plugin_id"),
        plugin_name: field("plugin_name"),
        plugin_family: field("plugin_family"),
        severity: coerce.severity(field("severity")),
        port: coerce.number("port", field("port")),
        protocol: field("protocol"),
        service_name: field("service_name"),
        description: field("description"),
        solution: field("solution"),
        synopsis: field("synopsis"),
        risk_factor: field("risk_factor"),
        plugin_type: field("plugin_type"),
        cvss_base_score: coerce.number("cvss_base_score", field("cvss_base_score")),
        cvss_temporal_score: coerce.number("cvss_temporal_score", field("cvss_temporal_score")),
        cvss_vector: field("cvss_vector"),
        cvss3_base_score: coerce.number("cvss3_base_score", field("cvss3_base_score")),
        cvss3_vector: field("cvss3_vector"),
        exploit: ExploitInfo {
            available: coerce.flag("exploit_available", field("exploit_available")),
            metasploit: coerce.flag(
                "exploit_framework_metasploit",
                field("exploit_framework_metasploit"),
            ),
            canvas: coerce.flag("exploit_framework_canvas", field("exploit_framework_canvas")),
            core: coerce.flag("exploit_framework_core", field("exploit_framework_core")),
            ease: field("exploitability_ease"),
        },
        dates: PluginDates {
            plugin_publication: field("plugin_publication_date"),
            plugin_modification: field("plugin_modification_date"),
            vuln_publication: field("vuln_publication_date"),
            patch_publication: field("patch_publication_date"),
        },
        references: References {
            cve: list("cve"),
            bid: list("bid"),
            xref: list("xref"),
            see_also: list("see_also"),
        },
        plugin_output: if config.effective_include_plugin_output() {
            field("plugin_output")
        } else {
            None
        },
        compliance: if config.effective_include_compliance() {
            extract_compliance(item)
        } else {
            None
        },
    }
}

fn extract_compliance(item: &XmlElement) -> Option<ComplianceCheck> {
    let field = |name: &str| COMPLIANCE_FIELDS.resolve(name, item);
    let check = ComplianceCheck {
        check_name: field("check_name"),
        check_id: field("check_id"),
        result: field("result"),
        actual_value: field("actual_value"),
        policy_value: field("policy_value"),
        info: field("info"),
        solution: field("solution"),
        reference: field("reference"),
        audit_file: field("audit_file"),
    };
    (!check.is_empty()).then_some(check)
}
