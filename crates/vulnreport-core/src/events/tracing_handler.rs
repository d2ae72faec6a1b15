//! Forwards diagnostics to `tracing`.

use super::handler::DiagnosticsHandler;
use super::types::*;

/// Logs data-quality events at `warn` (absences at `debug`, since sparse
/// reports routinely lack optional blocks) and lifecycle events at `info`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingHandler;

impl DiagnosticsHandler for TracingHandler {
    fn on_structural_absence(&self, event: &StructuralAbsenceEvent) {
        tracing::debug!(
            container = event.container,
            context = %event.context,
            "expected container missing, using empty collection"
        );
    }

    fn on_field_coercion(&self, event: &FieldCoercionEvent) {
        tracing::warn!(
            record = %event.record,
            field = event.field,
            raw = %event.raw_value,
            fallback = %event.fallback,
            asset_ip = event.asset_ip.as_deref().unwrap_or_default(),
            "field coercion failed"
        );
    }

    fn on_dangling_reference(&self, event: &DanglingReferenceEvent) {
        tracing::warn!(
            asset_ip = event.asset_ip.as_deref().unwrap_or_default(),
            plugin_id = event.plugin_id.as_deref().unwrap_or_default(),
            "finding references an unknown asset"
        );
    }

    fn on_extraction_complete(&self, event: &ExtractionCompleteEvent) {
        tracing::info!(
            assets = event.assets,
            findings = event.findings,
            policy_present = event.policy_present,
            duration_ms = event.duration_ms,
            "extraction complete"
        );
    }

    fn on_validation_failed(&self, event: &ValidationFailedEvent) {
        tracing::warn!(violations = event.violations, "validation failed: {}", event.message);
    }

    fn on_metrics_computed(&self, event: &MetricsComputedEvent) {
        tracing::info!(
            total = event.total_vulnerabilities,
            unique = event.unique_vulnerabilities,
            excluded_informational = event.excluded_informational,
            duration_ms = event.duration_ms,
            "metrics computed"
        );
    }
}
