//! Post-extraction structural validation errors.

use super::error_code::{self, ErrorCode};
use crate::types::RecordKind;

/// A structural precondition on the extracted collections does not hold.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{collection} collection is empty")]
    EmptyCollection { collection: RecordKind },

    #[error("{collection} record #{index} is missing required field `{field}`")]
    MissingField {
        collection: RecordKind,
        field: &'static str,
        index: usize,
    },

    #[error("{} validation failures: {}", .0.len(), join_messages(.0))]
    Multiple(Vec<ValidationError>),
}

impl ValidationError {
    /// Flattens the error into its individual violations.
    pub fn violations(&self) -> Vec<&ValidationError> {
        match self {
            Self::Multiple(errors) => errors.iter().flat_map(|e| e.violations()).collect(),
            other => vec![other],
        }
    }
}

impl ErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        error_code::VALIDATION_ERROR
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
