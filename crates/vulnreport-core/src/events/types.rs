//! Diagnostic event payloads.

use crate::types::RecordKind;

/// An expected container (report, host list, policy block, properties) is
/// missing. Non-fatal; extraction degrades to empty collections.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuralAbsenceEvent {
    pub container: &'static str,
    pub context: String,
}

/// A field failed type coercion and fell back to its default.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldCoercionEvent {
    pub record: RecordKind,
    pub field: &'static str,
    pub raw_value: String,
    pub fallback: String,
    pub asset_ip: Option<String>,
}

/// A finding references an asset IP that no extracted asset carries.
#[derive(Debug, Clone, PartialEq)]
pub struct DanglingReferenceEvent {
    pub asset_ip: Option<String>,
    pub plugin_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionCompleteEvent {
    pub assets: usize,
    pub findings: usize,
    pub policy_present: bool,
    pub duration_ms: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationFailedEvent {
    pub violations: usize,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricsComputedEvent {
    pub total_vulnerabilities: usize,
    pub unique_vulnerabilities: usize,
    pub excluded_informational: usize,
    pub duration_ms: u64,
}

/// Every event the engine can record.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticEvent {
    StructuralAbsence(StructuralAbsenceEvent),
    FieldCoercion(FieldCoercionEvent),
    DanglingReference(DanglingReferenceEvent),
    ExtractionComplete(ExtractionCompleteEvent),
    ValidationFailed(ValidationFailedEvent),
    MetricsComputed(MetricsComputedEvent),
}

impl DiagnosticEvent {
    /// Warnings are data-quality signals; the rest are lifecycle events.
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            Self::StructuralAbsence(_)
                | Self::FieldCoercion(_)
                | Self::DanglingReference(_)
                | Self::ValidationFailed(_)
        )
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::StructuralAbsence(_) => "structural_absence",
            Self::FieldCoercion(_) => "field_coercion",
            Self::DanglingReference(_) => "dangling_reference",
            Self::ExtractionComplete(_) => "extraction_complete",
            Self::ValidationFailed(_) => "validation_failed",
            Self::MetricsComputed(_) => "metrics_computed",
        }
    }
}
