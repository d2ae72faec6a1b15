//! Metrics aggregation configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_HIGH_RISK_THRESHOLD, DEFAULT_TOP_N};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Keep severity-0 findings in every count. Default: false.
    pub include_informational: Option<bool>,
    /// Entries kept in the top asset / common finding rankings. Default: 5.
    pub top_n: Option<usize>,
    /// Compute the critical-severity KPIs. Default: false.
    pub critical_kpis: Option<bool>,
    /// Unique critical findings an asset must exceed to count as high-risk. Default: 3.
    pub high_risk_threshold: Option<usize>,
}

impl AnalysisConfig {
    pub fn effective_include_informational(&self) -> bool {
        self.include_informational.unwrap_or(false)
    }

    pub fn effective_top_n(&self) -> usize {
        self.top_n.unwrap_or(DEFAULT_TOP_N)
    }

    pub fn effective_critical_kpis(&self) -> bool {
        self.critical_kpis.unwrap_or(false)
    }

    pub fn effective_high_risk_threshold(&self) -> usize {
        self.high_risk_threshold.unwrap_or(DEFAULT_HIGH_RISK_THRESHOLD)
    }
}
