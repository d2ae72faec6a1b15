//! Critical-severity KPIs.

use rustc_hash::{FxHashMap, FxHashSet};
use vulnreport_core::types::Finding;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriticalKpis {
    pub unique_critical: usize,
    pub critical: usize,
    pub percentage_critical: f64,
    pub affected_assets: usize,
    pub high_risk_assets: usize,
}

/// `part / total * 100`, rounded to two decimals. Zero when `total` is zero.
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = part as f64 / total as f64 * 100.0;
    (raw * 100.0).round() / 100.0
}

/// `filtered` is the severity-filtered finding list, `unique` its
/// deduplicated form, and `all` the unfiltered extraction output.
pub fn compute(
    filtered: &[&Finding],
    unique: &[&Finding],
    all: &[Finding],
    high_risk_threshold: usize,
) -> CriticalKpis {
    let critical = filtered.iter().filter(|f| f.is_critical()).count();

    let mut critical_per_asset: FxHashMap<Option<&str>, usize> = FxHashMap::default();
    for finding in unique.iter().filter(|f| f.is_critical()) {
        *critical_per_asset.entry(finding.asset_ip.as_deref()).or_default() += 1;
    }
    let unique_critical = critical_per_asset.values().sum();
    let high_risk_assets = critical_per_asset
        .values()
        .filter(|count| **count > high_risk_threshold)
        .count();

    let affected_assets = all
        .iter()
        .filter(|f| !f.severity.is_informational())
        .filter_map(|f| f.asset_ip.as_deref())
        .collect::<FxHashSet<_>>()
        .len();

    CriticalKpis {
        unique_critical,
        critical,
        percentage_critical: percentage(critical, filtered.len()),
        affected_assets,
        high_risk_assets,
    }
}
