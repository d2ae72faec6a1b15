//! Error handling for vulnreport.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod metrics_error;
pub mod parse_error;
pub mod pipeline_error;
pub mod validation_error;

pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use metrics_error::MetricsError;
pub use parse_error::ParseError;
pub use pipeline_error::{PipelineError, PipelineStage};
pub use validation_error::ValidationError;
