//! ErrorCode trait for stable, machine-readable error identifiers.

/// Every error enum implements this to expose a stable code string that
/// renderers and wrappers can key off without parsing messages.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "PARSE_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const PARSE_ERROR: &str = "PARSE_ERROR";
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const METRICS_ERROR: &str = "METRICS_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const IO_ERROR: &str = "IO_ERROR";
