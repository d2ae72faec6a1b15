//! MetricsAggregator: findings and assets → [`MetricsReport`].

use std::collections::BTreeMap;
use std::time::Instant;

use vulnreport_core::config::AnalysisConfig;
use vulnreport_core::errors::MetricsError;
use vulnreport_core::events::types::MetricsComputedEvent;
use vulnreport_core::tracing::fields;
use vulnreport_core::types::{Asset, Finding};
use vulnreport_core::{DiagnosticEvent, EventDispatcher};

use super::dedup::deduplicate;
use super::filter::SeverityPolicy;
use super::kpi;
use super::ranking::{group_counts, rank, sort_by_key};
use super::types::{AssetCount, FamilyCount, MetricsReport, NameCount};

pub struct MetricsAggregator<'a> {
    policy: SeverityPolicy,
    top_n: usize,
    critical_kpis: bool,
    high_risk_threshold: usize,
    dispatcher: &'a EventDispatcher,
}

impl<'a> MetricsAggregator<'a> {
    /// Rejects a zero `top_n`; rankings must be able to hold at least one entry.
    pub fn new(config: &AnalysisConfig, dispatcher: &'a EventDispatcher) -> Result<Self, MetricsError> {
        let top_n = config.effective_top_n();
        if top_n == 0 {
            return Err(MetricsError::InvalidLimit {
                field: "top_n",
                value: top_n,
            });
        }
        Ok(Self {
            policy: SeverityPolicy::from_config(config),
            top_n,
            critical_kpis: config.effective_critical_kpis(),
            high_risk_threshold: config.effective_high_risk_threshold(),
            dispatcher,
        })
    }

    /// Computes every metric in a fixed order from the full finding list.
    /// Deterministic for a given input order.
    pub fn aggregate(&self, findings: &[Finding], assets: &[Asset]) -> MetricsReport {
        let start = Instant::now();

        let filtered = self.policy.apply(findings);
        let unique = deduplicate(&filtered);

        let mut severity_counts: BTreeMap<u8, usize> = BTreeMap::new();
        for finding in &unique {
            *severity_counts.entry(finding.severity.level()).or_default() += 1;
        }

        // Asset ties resolve by ascending IP string, not host order.
        let asset_groups = sort_by_key(group_counts(&unique, |f| f.asset_ip.as_deref()));
        let top_vulnerable_assets = rank(asset_groups, Some(self.top_n))
            .into_iter()
            .map(|(asset_ip, vuln_count)| AssetCount { asset_ip, vuln_count })
            .collect();
        let common_vulnerabilities = rank(group_counts(&unique, |f| f.plugin_name.as_deref()), Some(self.top_n))
            .into_iter()
            .map(|(name, count)| NameCount { name, count })
            .collect();
        let vulnerabilities_by_type = rank(group_counts(&unique, |f| f.plugin_family.as_deref()), None)
            .into_iter()
            .map(|(family, count)| FamilyCount { family, count })
            .collect();

        let mut report = MetricsReport {
            total_assets: assets.len(),
            total_vulnerabilities: filtered.len(),
            unique_vulnerabilities: unique.len(),
            severity_counts,
            top_vulnerable_assets,
            common_vulnerabilities,
            vulnerabilities_by_type,
            ..Default::default()
        };

        if self.critical_kpis {
            let kpis = kpi::compute(&filtered, &unique, findings, self.high_risk_threshold);
            report.unique_critical_vulnerabilities = Some(kpis.unique_critical);
            report.critical_vulnerabilities = Some(kpis.critical);
            report.percentage_critical_vulnerabilities = Some(kpis.percentage_critical);
            report.affected_assets = Some(kpis.affected_assets);
            report.high_risk_assets_count = Some(kpis.high_risk_assets);
        }

        let duration_ms = start.elapsed().as_millis() as u64;
        tracing::debug!(
            { fields::FINDING_COUNT } = findings.len(),
            unique = report.unique_vulnerabilities,
            { fields::AGGREGATION_TIME_MS } = duration_ms,
            "metrics computed"
        );
        self.dispatcher
            .record(&DiagnosticEvent::MetricsComputed(MetricsComputedEvent {
                total_vulnerabilities: report.total_vulnerabilities,
                unique_vulnerabilities: report.unique_vulnerabilities,
                excluded_informational: findings.len() - filtered.len(),
                duration_ms,
            }));
        report
    }
}
