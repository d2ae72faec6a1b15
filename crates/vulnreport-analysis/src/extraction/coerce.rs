//! Typed coercion of raw field text. Failures fall back and are reported as
//! field-coercion diagnostics, never as errors.

use std::str::FromStr;

use vulnreport_core::events::types::FieldCoercionEvent;
use vulnreport_core::types::{RecordKind, Severity};
use vulnreport_core::{DiagnosticEvent, EventDispatcher};

/// Coerces fields of one record, attributing diagnostics to its asset.
pub(crate) struct Coercer<'a> {
    dispatcher: &'a EventDispatcher,
    record: RecordKind,
    asset_ip: Option<&'a str>,
}

impl<'a> Coercer<'a> {
    pub(crate) fn new(dispatcher: &'a EventDispatcher, record: RecordKind, asset_ip: Option<&'a str>) -> Self {
        Self {
            dispatcher,
            record,
            asset_ip,
        }
    }

    /// Severity levels 0..=4. Anything else becomes informational.
    pub(crate) fn severity(&self, raw: Option<String>) -> Severity {
        let Some(raw) = raw else {
            return Severity::Info;
        };
        Severity::parse(&raw).unwrap_or_else(|| {
            self.report("severity", &raw, &Severity::Info.level().to_string());
            Severity::Info
        })
    }

    /// Numeric fields (ports, scores). Unparsable text becomes absent.
    pub(crate) fn number<T: FromStr>(&self, field: &'static str, raw: Option<String>) -> Option<T> {
        let raw = raw?;
        match raw.trim().parse::<T>() {
            Ok(value) => Some(value),
            Err(_) => {
                self.report(field, &raw, vulnreport_core::constants::NOT_AVAILABLE);
                None
            }
        }
    }

    /// Boolean flags. Accepts true/false, yes/no and 1/0 in any case.
    pub(crate) fn flag(&self, field: &'static str, raw: Option<String>) -> Option<bool> {
        let raw = raw?;
        match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Some(true),
            "false" | "no" | "0" => Some(false),
            _ => {
                self.report(field, &raw, vulnreport_core::constants::NOT_AVAILABLE);
                None
            }
        }
    }

    fn report(&self, field: &'static str, raw: &str, fallback: &str) {
        self.dispatcher
            .record(&DiagnosticEvent::FieldCoercion(FieldCoercionEvent {
                record: self.record,
                field,
                raw_value: raw.to_string(),
                fallback: fallback.to_string(),
                asset_ip: self.asset_ip.map(str::to_string),
            }));
    }
}
