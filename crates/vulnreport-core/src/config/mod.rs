//! Configuration system for vulnreport.
//! TOML-based, 4-layer resolution: CLI > env > project file > defaults.

pub mod analysis_config;
pub mod extraction_config;
pub mod validation_config;
pub mod vulnreport_config;

pub use analysis_config::AnalysisConfig;
pub use extraction_config::ExtractionConfig;
pub use validation_config::ValidationConfig;
pub use vulnreport_config::{CliOverrides, VulnReportConfig};
