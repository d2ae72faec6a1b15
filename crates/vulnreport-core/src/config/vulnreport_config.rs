//! Top-level vulnreport configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{AnalysisConfig, ExtractionConfig, ValidationConfig};
use crate::constants::CONFIG_FILE_NAME;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`VULNREPORT_*`)
/// 3. Project config (`vulnreport.toml` in the given directory)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct VulnReportConfig {
    pub extraction: ExtractionConfig,
    pub validation: ValidationConfig,
    pub analysis: AnalysisConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub include_informational: Option<bool>,
    pub critical_kpis: Option<bool>,
    pub top_n: Option<usize>,
    pub skip_validation: Option<bool>,
}

impl VulnReportConfig {
    /// Load configuration with layered resolution. A missing project file
    /// falls back to defaults; an unreadable or invalid one is an error.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &VulnReportConfig) -> Result<(), ConfigError> {
        if config.analysis.top_n == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "analysis.top_n".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    fn merge_toml_file(config: &mut VulnReportConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: VulnReportConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a `Some` value.
    fn merge(base: &mut VulnReportConfig, other: &VulnReportConfig) {
        // Extraction
        if other.extraction.include_plugin_output.is_some() {
            base.extraction.include_plugin_output = other.extraction.include_plugin_output;
        }
        if other.extraction.include_compliance.is_some() {
            base.extraction.include_compliance = other.extraction.include_compliance;
        }

        // Validation
        if other.validation.enabled.is_some() {
            base.validation.enabled = other.validation.enabled;
        }
        if other.validation.collect_all.is_some() {
            base.validation.collect_all = other.validation.collect_all;
        }
        if other.validation.require_policy.is_some() {
            base.validation.require_policy = other.validation.require_policy;
        }
        if other.validation.check_asset_references.is_some() {
            base.validation.check_asset_references = other.validation.check_asset_references;
        }

        // Analysis
        if other.analysis.include_informational.is_some() {
            base.analysis.include_informational = other.analysis.include_informational;
        }
        if other.analysis.top_n.is_some() {
            base.analysis.top_n = other.analysis.top_n;
        }
        if other.analysis.critical_kpis.is_some() {
            base.analysis.critical_kpis = other.analysis.critical_kpis;
        }
        if other.analysis.high_risk_threshold.is_some() {
            base.analysis.high_risk_threshold = other.analysis.high_risk_threshold;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `VULNREPORT_ANALYSIS_TOP_N`, `VULNREPORT_VALIDATION_ENABLED`, etc.
    /// Unparsable values are ignored.
    fn apply_env_overrides(config: &mut VulnReportConfig) {
        if let Some(v) = env_parse::<bool>("VULNREPORT_ANALYSIS_INCLUDE_INFORMATIONAL") {
            config.analysis.include_informational = Some(v);
        }
        if let Some(v) = env_parse::<usize>("VULNREPORT_ANALYSIS_TOP_N") {
            config.analysis.top_n = Some(v);
        }
        if let Some(v) = env_parse::<bool>("VULNREPORT_ANALYSIS_CRITICAL_KPIS") {
            config.analysis.critical_kpis = Some(v);
        }
        if let Some(v) = env_parse::<usize>("VULNREPORT_ANALYSIS_HIGH_RISK_THRESHOLD") {
            config.analysis.high_risk_threshold = Some(v);
        }
        if let Some(v) = env_parse::<bool>("VULNREPORT_VALIDATION_ENABLED") {
            config.validation.enabled = Some(v);
        }
        if let Some(v) = env_parse::<bool>("VULNREPORT_VALIDATION_COLLECT_ALL") {
            config.validation.collect_all = Some(v);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut VulnReportConfig, cli: &CliOverrides) {
        if let Some(v) = cli.include_informational {
            config.analysis.include_informational = Some(v);
        }
        if let Some(v) = cli.critical_kpis {
            config.analysis.critical_kpis = Some(v);
        }
        if let Some(v) = cli.top_n {
            config.analysis.top_n = Some(v);
        }
        if let Some(skip) = cli.skip_validation {
            config.validation.enabled = Some(!skip);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|val| val.trim().parse().ok())
}
