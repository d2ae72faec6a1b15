//! Extractor: locates the report, host and policy containers once, then
//! builds each record collection from them.

use std::time::Instant;

use vulnreport_core::config::ExtractionConfig;
use vulnreport_core::constants::{
    HOST_ELEMENT, HOST_PROPERTIES_ELEMENT, ITEM_ELEMENT, POLICY_ELEMENT, REPORT_ELEMENT,
};
use vulnreport_core::errors::ParseError;
use vulnreport_core::events::types::{ExtractionCompleteEvent, StructuralAbsenceEvent};
use vulnreport_core::tracing::fields;
use vulnreport_core::types::{Asset, ExtractedReport, Finding, PolicyRecords, ScanMetadata};
use vulnreport_core::{DiagnosticEvent, EventDispatcher};

use super::assets::extract_asset;
use super::findings::extract_finding;
use super::metadata::extract_metadata;
use super::policy::extract_policy;
use crate::document::{XmlDocument, XmlElement};

/// The containers every collection is built from.
struct Layout<'d> {
    report: Option<&'d XmlElement>,
    hosts: Vec<&'d XmlElement>,
    policy: Option<&'d XmlElement>,
}

pub struct Extractor<'a> {
    config: &'a ExtractionConfig,
    dispatcher: &'a EventDispatcher,
}

impl<'a> Extractor<'a> {
    pub fn new(config: &'a ExtractionConfig, dispatcher: &'a EventDispatcher) -> Self {
        Self { config, dispatcher }
    }

    /// Build all four collections. Never fails on a well-formed document.
    pub fn extract(&self, doc: &XmlDocument) -> ExtractedReport {
        let start = Instant::now();
        let layout = self.locate(doc);

        let report = ExtractedReport {
            metadata: vec![self.metadata_from(&layout)],
            assets: self.assets_from(&layout),
            findings: self.findings_from(&layout),
            policy: self.policy_from(&layout),
        };

        let duration_ms = start.elapsed().as_millis() as u64;
        tracing::debug!(
            { fields::HOST_COUNT } = layout.hosts.len(),
            { fields::FINDING_COUNT } = report.findings.len(),
            { fields::EXTRACTION_TIME_MS } = duration_ms,
            "extraction complete"
        );
        self.dispatcher
            .record(&DiagnosticEvent::ExtractionComplete(ExtractionCompleteEvent {
                assets: report.assets.len(),
                findings: report.findings.len(),
                policy_present: !report.policy.is_empty(),
                duration_ms,
            }));
        report
    }

    /// Single-element metadata collection.
    pub fn extract_metadata(&self, doc: &XmlDocument) -> Vec<ScanMetadata> {
        vec![self.metadata_from(&self.locate(doc))]
    }

    pub fn extract_assets(&self, doc: &XmlDocument) -> Vec<Asset> {
        self.assets_from(&self.locate(doc))
    }

    /// Findings in document order: hosts in order, items in order within each host.
    pub fn extract_findings(&self, doc: &XmlDocument) -> Vec<Finding> {
        self.findings_from(&self.locate(doc))
    }

    pub fn extract_policy(&self, doc: &XmlDocument) -> PolicyRecords {
        self.policy_from(&self.locate(doc))
    }

    fn locate<'d>(&self, doc: &'d XmlDocument) -> Layout<'d> {
        let root = doc.root();
        let report = root.find_first(REPORT_ELEMENT);
        if report.is_none() {
            self.absent(REPORT_ELEMENT, root.name());
        }
        let hosts = root.find_all(HOST_ELEMENT);
        if hosts.is_empty() {
            self.absent(HOST_ELEMENT, root.name());
        }
        let policy = root.find_first(POLICY_ELEMENT);
        if policy.is_none() {
            self.absent(POLICY_ELEMENT, root.name());
        }
        Layout {
            report,
            hosts,
            policy,
        }
    }

    fn metadata_from(&self, layout: &Layout<'_>) -> ScanMetadata {
        extract_metadata(layout.report, layout.hosts.first().copied(), layout.policy)
    }

    fn assets_from(&self, layout: &Layout<'_>) -> Vec<Asset> {
        layout
            .hosts
            .iter()
            .map(|host| {
                if host.child(HOST_PROPERTIES_ELEMENT).is_none() {
                    self.absent(HOST_PROPERTIES_ELEMENT, host.attribute("name").unwrap_or_default());
                }
                extract_asset(host)
            })
            .collect()
    }

    fn findings_from(&self, layout: &Layout<'_>) -> Vec<Finding> {
        let mut findings = Vec::new();
        for host in &layout.hosts {
            let asset_ip = host.attribute("name");
            findings.extend(
                host.find_all(ITEM_ELEMENT)
                    .into_iter()
                    .map(|item| extract_finding(item, asset_ip, self.config, self.dispatcher)),
            );
        }
        findings
    }

    fn policy_from(&self, layout: &Layout<'_>) -> PolicyRecords {
        layout
            .policy
            .map(|policy| extract_policy(policy, self.dispatcher))
            .unwrap_or_default()
    }

    fn absent(&self, container: &'static str, context: &str) {
        self.dispatcher
            .record(&DiagnosticEvent::StructuralAbsence(StructuralAbsenceEvent {
                container,
                context: context.to_string(),
            }));
    }
}

/// Parse and extract in one step.
pub fn extract_str(
    input: &str,
    config: &ExtractionConfig,
    dispatcher: &EventDispatcher,
) -> Result<ExtractedReport, ParseError> {
    let doc = XmlDocument::parse(input)?;
    Ok(Extractor::new(config, dispatcher).extract(&doc))
}
