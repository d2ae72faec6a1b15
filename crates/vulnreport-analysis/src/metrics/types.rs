//! The metrics snapshot handed to renderers and persisted as JSON.
//!
//! Key names are a stable external contract: renderers and stored snapshots
//! look them up verbatim.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use vulnreport_core::errors::MetricsError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetCount {
    pub asset_ip: String,
    pub vuln_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameCount {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyCount {
    pub family: String,
    pub count: usize,
}

/// Aggregate counts and rankings for one document.
///
/// The critical-severity KPIs are present only when requested and are
/// omitted from the JSON object otherwise.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricsReport {
    pub total_assets: usize,
    pub total_vulnerabilities: usize,
    pub unique_vulnerabilities: usize,
    /// Unique findings per severity level, ascending.
    pub severity_counts: BTreeMap<u8, usize>,
    #[serde(alias = "top_affected_assets")]
    pub top_vulnerable_assets: Vec<AssetCount>,
    pub common_vulnerabilities: Vec<NameCount>,
    pub vulnerabilities_by_type: Vec<FamilyCount>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_critical_vulnerabilities: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical_vulnerabilities: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage_critical_vulnerabilities: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affected_assets: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_risk_assets_count: Option<usize>,
}

impl MetricsReport {
    pub fn has_critical_kpis(&self) -> bool {
        self.percentage_critical_vulnerabilities.is_some()
    }

    /// Checks the cross-field invariants every snapshot must satisfy.
    pub fn check_consistency(&self) -> Result<(), MetricsError> {
        let histogram_total: usize = self.severity_counts.values().sum();
        if histogram_total != self.unique_vulnerabilities {
            return Err(inconsistent(format!(
                "severity_counts sums to {histogram_total}, unique_vulnerabilities is {}",
                self.unique_vulnerabilities
            )));
        }
        if self.total_vulnerabilities < self.unique_vulnerabilities {
            return Err(inconsistent(format!(
                "total_vulnerabilities {} is below unique_vulnerabilities {}",
                self.total_vulnerabilities, self.unique_vulnerabilities
            )));
        }
        if let Some(level) = self.severity_counts.keys().find(|level| **level > 4) {
            return Err(inconsistent(format!("severity level {level} is out of range")));
        }
        let asset_counts: Vec<usize> = self.top_vulnerable_assets.iter().map(|a| a.vuln_count).collect();
        let name_counts: Vec<usize> = self.common_vulnerabilities.iter().map(|n| n.count).collect();
        let family_counts: Vec<usize> = self.vulnerabilities_by_type.iter().map(|f| f.count).collect();
        for (key, counts) in [
            ("top_vulnerable_assets", asset_counts),
            ("common_vulnerabilities", name_counts),
            ("vulnerabilities_by_type", family_counts),
        ] {
            if counts.windows(2).any(|pair| pair[0] < pair[1]) {
                return Err(inconsistent(format!("{key} is not sorted by count")));
            }
        }
        if let Some(pct) = self.percentage_critical_vulnerabilities {
            if !(0.0..=100.0).contains(&pct) {
                return Err(inconsistent(format!("percentage_critical_vulnerabilities {pct} is out of range")));
            }
        }
        Ok(())
    }

    /// Serialize to a pretty-printed JSON object after checking consistency.
    pub fn to_json(&self) -> Result<String, MetricsError> {
        self.check_consistency()?;
        serde_json::to_string_pretty(self).map_err(|e| MetricsError::Serialization {
            message: e.to_string(),
        })
    }

    /// Parse a persisted snapshot. Accepts `top_affected_assets` as an alias.
    pub fn from_json(json: &str) -> Result<Self, MetricsError> {
        let report: Self = serde_json::from_str(json).map_err(|e| MetricsError::Serialization {
            message: e.to_string(),
        })?;
        report.check_consistency()?;
        Ok(report)
    }
}

fn inconsistent(message: String) -> MetricsError {
    MetricsError::Inconsistent { message }
}
