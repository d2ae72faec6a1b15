//! Validator: non-empty collections and required fields, read from the same
//! field tables extraction uses. Never mutates the report.

use rustc_hash::FxHashSet;
use vulnreport_core::config::ValidationConfig;
use vulnreport_core::errors::ValidationError;
use vulnreport_core::events::types::{DanglingReferenceEvent, ValidationFailedEvent};
use vulnreport_core::types::{ExtractedReport, FieldRecord};
use vulnreport_core::{DiagnosticEvent, EventDispatcher};

use crate::extraction::fields::table_for;

pub struct Validator<'a> {
    config: &'a ValidationConfig,
    dispatcher: &'a EventDispatcher,
}

impl<'a> Validator<'a> {
    pub fn new(config: &'a ValidationConfig, dispatcher: &'a EventDispatcher) -> Self {
        Self { config, dispatcher }
    }

    /// Check metadata, assets, findings and policy info in that order.
    ///
    /// Stops at the first violation unless `collect_all` is set, in which case
    /// two or more violations come back as [`ValidationError::Multiple`].
    pub fn validate(&self, report: &ExtractedReport) -> Result<(), ValidationError> {
        let fail_fast = !self.config.effective_collect_all();
        let mut violations = Vec::new();

        self.check_collections(report, fail_fast, &mut violations);

        if self.config.effective_check_asset_references() {
            self.check_asset_references(report);
        }

        let result = match violations.len() {
            0 => return Ok(()),
            1 => violations.remove(0),
            _ => ValidationError::Multiple(violations),
        };
        tracing::debug!(violations = result.violations().len(), "validation failed");
        self.dispatcher
            .record(&DiagnosticEvent::ValidationFailed(ValidationFailedEvent {
                violations: result.violations().len(),
                message: result.to_string(),
            }));
        Err(result)
    }

    fn check_collections(&self, report: &ExtractedReport, fail_fast: bool, out: &mut Vec<ValidationError>) {
        check_collection(&report.metadata, fail_fast, out);
        if fail_fast && !out.is_empty() {
            return;
        }
        check_collection(&report.assets, fail_fast, out);
        if fail_fast && !out.is_empty() {
            return;
        }
        check_collection(&report.findings, fail_fast, out);
        if fail_fast && !out.is_empty() {
            return;
        }
        if self.config.effective_require_policy() {
            check_collection(&report.policy.info, fail_fast, out);
        }
    }

    /// Findings whose asset IP matches no asset are a warning, not a failure.
    fn check_asset_references(&self, report: &ExtractedReport) {
        let known: FxHashSet<Option<&str>> = report.assets.iter().map(|a| a.ip.as_deref()).collect();
        for finding in &report.findings {
            if !known.contains(&finding.asset_ip.as_deref()) {
                self.dispatcher
                    .record(&DiagnosticEvent::DanglingReference(DanglingReferenceEvent {
                        asset_ip: finding.asset_ip.clone(),
                        plugin_id: finding.plugin_id.clone(),
                    }));
            }
        }
    }
}

fn check_collection<R: FieldRecord>(records: &[R], fail_fast: bool, out: &mut Vec<ValidationError>) {
    if records.is_empty() {
        out.push(ValidationError::EmptyCollection { collection: R::KIND });
        return;
    }
    let required: Vec<&'static str> = table_for(R::KIND).required().map(|s| s.name).collect();
    for (index, record) in records.iter().enumerate() {
        for &field in &required {
            if !record.has_value(field) {
                out.push(ValidationError::MissingField {
                    collection: R::KIND,
                    field,
                    index,
                });
                if fail_fast {
                    return;
                }
            }
        }
    }
}
