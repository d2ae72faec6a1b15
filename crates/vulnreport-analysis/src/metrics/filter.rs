//! Severity filtering, applied before any counting.

use vulnreport_core::config::AnalysisConfig;
use vulnreport_core::types::Finding;

/// Whether informational (severity 0) findings take part in counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeverityPolicy {
    #[default]
    ExcludeInformational,
    IncludeInformational,
}

impl SeverityPolicy {
    pub fn from_config(config: &AnalysisConfig) -> Self {
        if config.effective_include_informational() {
            Self::IncludeInformational
        } else {
            Self::ExcludeInformational
        }
    }

    pub fn admits(self, finding: &Finding) -> bool {
        match self {
            Self::IncludeInformational => true,
            Self::ExcludeInformational => !finding.severity.is_informational(),
        }
    }

    /// Findings admitted by this policy, in input order.
    pub fn apply(self, findings: &[Finding]) -> Vec<&Finding> {
        findings.iter().filter(|f| self.admits(f)).collect()
    }
}
