//! Metrics aggregation and snapshot errors.

use super::error_code::{self, ErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    #[error("Invalid limit for {field}: {value}")]
    InvalidLimit { field: &'static str, value: usize },

    #[error("Inconsistent metrics snapshot: {message}")]
    Inconsistent { message: String },

    #[error("Metrics serialization failed: {message}")]
    Serialization { message: String },
}

impl ErrorCode for MetricsError {
    fn error_code(&self) -> &'static str {
        error_code::METRICS_ERROR
    }
}
