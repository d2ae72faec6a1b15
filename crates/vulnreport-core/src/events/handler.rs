//! DiagnosticsHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for receiving diagnostics events.
///
/// Handlers only override the events they care about. `record` routes an
/// event to the matching method and is what the dispatcher calls.
pub trait DiagnosticsHandler: Send + Sync {
    // ---- Data quality ----
    fn on_structural_absence(&self, _event: &StructuralAbsenceEvent) {}
    fn on_field_coercion(&self, _event: &FieldCoercionEvent) {}
    fn on_dangling_reference(&self, _event: &DanglingReferenceEvent) {}

    // ---- Stage lifecycle ----
    fn on_extraction_complete(&self, _event: &ExtractionCompleteEvent) {}
    fn on_validation_failed(&self, _event: &ValidationFailedEvent) {}
    fn on_metrics_computed(&self, _event: &MetricsComputedEvent) {}

    fn record(&self, event: &DiagnosticEvent) {
        match event {
            DiagnosticEvent::StructuralAbsence(e) => self.on_structural_absence(e),
            DiagnosticEvent::FieldCoercion(e) => self.on_field_coercion(e),
            DiagnosticEvent::DanglingReference(e) => self.on_dangling_reference(e),
            DiagnosticEvent::ExtractionComplete(e) => self.on_extraction_complete(e),
            DiagnosticEvent::ValidationFailed(e) => self.on_validation_failed(e),
            DiagnosticEvent::MetricsComputed(e) => self.on_metrics_computed(e),
        }
    }
}
