//! Console reporter — human-readable summary with optional color codes.

use std::fmt::Write;

use vulnreport_core::errors::MetricsError;
use vulnreport_core::Severity;

use super::Reporter;
use crate::metrics::MetricsReport;

pub struct ConsoleReporter {
    pub use_color: bool,
}

impl ConsoleReporter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn color_start(&self, severity: Severity) -> &'static str {
        if !self.use_color {
            return "";
        }
        match severity {
            Severity::Critical => "\x1b[35m", // magenta
            Severity::High => "\x1b[31m",     // red
            Severity::Medium => "\x1b[33m",   // yellow
            Severity::Low => "\x1b[36m",      // cyan
            Severity::Info => "\x1b[90m",     // gray
        }
    }

    fn color_end(&self) -> &'static str {
        if self.use_color {
            "\x1b[0m"
        } else {
            ""
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, report: &MetricsReport) -> Result<String, MetricsError> {
        report.check_consistency()?;
        let mut out = String::new();
        render(self, report, &mut out).map_err(|e| MetricsError::Serialization {
            message: e.to_string(),
        })?;
        Ok(out)
    }
}

fn render(reporter: &ConsoleReporter, report: &MetricsReport, out: &mut String) -> std::fmt::Result {
    writeln!(out, "Vulnerability Scan Summary")?;
    writeln!(out, "==========================")?;
    writeln!(out, "Assets scanned:           {}", report.total_assets)?;
    writeln!(out, "Total vulnerabilities:    {}", report.total_vulnerabilities)?;
    writeln!(out, "Unique vulnerabilities:   {}", report.unique_vulnerabilities)?;

    writeln!(out, "\nBy severity")?;
    for (level, count) in &report.severity_counts {
        let Some(severity) = Severity::from_level(i64::from(*level)) else {
            continue;
        };
        writeln!(
            out,
            "  {}{:<10}{} {count}",
            reporter.color_start(severity),
            severity.name(),
            reporter.color_end()
        )?;
    }

    writeln!(out, "\nMost vulnerable assets")?;
    for asset in &report.top_vulnerable_assets {
        writeln!(out, "  {:<20} {}", asset.asset_ip, asset.vuln_count)?;
    }

    writeln!(out, "\nMost common vulnerabilities")?;
    for entry in &report.common_vulnerabilities {
        writeln!(out, "  {:>4}  {}", entry.count, entry.name)?;
    }

    writeln!(out, "\nBy plugin family")?;
    for entry in &report.vulnerabilities_by_type {
        writeln!(out, "  {:>4}  {}", entry.count, entry.family)?;
    }

    if let (Some(critical), Some(pct), Some(affected), Some(high_risk)) = (
        report.critical_vulnerabilities,
        report.percentage_critical_vulnerabilities,
        report.affected_assets,
        report.high_risk_assets_count,
    ) {
        writeln!(out, "\nCritical KPIs")?;
        writeln!(out, "  Critical findings:      {critical} ({pct:.2}%)")?;
        if let Some(unique) = report.unique_critical_vulnerabilities {
            writeln!(out, "  Unique critical:        {unique}")?;
        }
        writeln!(out, "  Affected assets:        {affected}")?;
        writeln!(out, "  High-risk assets:       {high_risk}")?;
    }
    Ok(())
}
