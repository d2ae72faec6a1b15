//! Pipeline errors. Each variant identifies the stage that failed.

use std::fmt;
use std::path::PathBuf;

use super::error_code::{self, ErrorCode};
use super::{ConfigError, MetricsError, ParseError, ValidationError};
use crate::types::ExtractedReport;

/// Stage of the extract → validate → aggregate pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineStage {
    Load,
    Parse,
    Validate,
    Aggregate,
}

impl PipelineStage {
    pub fn name(self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::Parse => "parse",
            Self::Validate => "validate",
            Self::Aggregate => "aggregate",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors that can occur during a pipeline run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// The raw extracted collections are kept for diagnostics.
    #[error("Validation error: {error}")]
    Validation {
        error: ValidationError,
        extracted: Box<ExtractedReport>,
    },

    #[error("Metrics error: {0}")]
    Metrics(#[from] MetricsError),
}

impl PipelineError {
    /// The stage that failed.
    pub fn stage(&self) -> PipelineStage {
        match self {
            Self::Io { .. } | Self::Config(_) => PipelineStage::Load,
            Self::Parse(_) => PipelineStage::Parse,
            Self::Validation { .. } => PipelineStage::Validate,
            Self::Metrics(_) => PipelineStage::Aggregate,
        }
    }

    /// Extracted collections, when the failure happened after extraction.
    pub fn extracted(&self) -> Option<&ExtractedReport> {
        match self {
            Self::Validation { extracted, .. } => Some(&**extracted),
            _ => None,
        }
    }
}

impl ErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::IO_ERROR,
            Self::Config(e) => e.error_code(),
            Self::Parse(e) => e.error_code(),
            Self::Validation { error, .. } => error.error_code(),
            Self::Metrics(e) => e.error_code(),
        }
    }
}
