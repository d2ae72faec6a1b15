//! JSON reporter — the metrics snapshot with its stable key names.

use vulnreport_core::errors::MetricsError;

use super::Reporter;
use crate::metrics::MetricsReport;

pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, report: &MetricsReport) -> Result<String, MetricsError> {
        report.to_json()
    }
}
