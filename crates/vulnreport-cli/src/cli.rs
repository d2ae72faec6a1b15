//! Argument parsing and the single run command.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use vulnreport_analysis::reporters::console::ConsoleReporter;
use vulnreport_analysis::reporters::{create_reporter, Reporter};
use vulnreport_analysis::Pipeline;
use vulnreport_core::config::CliOverrides;
use vulnreport_core::errors::{MetricsError, PipelineError};
use vulnreport_core::events::TracingHandler;
use vulnreport_core::{EventDispatcher, VulnReportConfig};

#[derive(Debug, Parser)]
#[command(
    name = "vulnreport",
    version = env!("CARGO_PKG_VERSION"),
    about = "Extract, validate and summarize a vulnerability scan report"
)]
pub struct Cli {
    /// Scan report to analyze (.nessus XML)
    pub input: PathBuf,

    /// Output format
    #[arg(long, default_value = "console", value_parser = ["json", "console"])]
    pub format: String,

    /// Directory containing vulnreport.toml
    #[arg(long, default_value = ".")]
    pub config: PathBuf,

    /// Count informational (severity 0) findings
    #[arg(long)]
    pub include_informational: bool,

    /// Add critical-severity KPIs to the summary
    #[arg(long)]
    pub critical_kpis: bool,

    /// Entries kept in the top asset and common finding rankings
    #[arg(long)]
    pub top_n: Option<usize>,

    /// Aggregate the extracted records without validating them
    #[arg(long)]
    pub skip_validation: bool,

    /// Disable ANSI colors in console output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            include_informational: self.include_informational.then_some(true),
            critical_kpis: self.critical_kpis.then_some(true),
            top_n: self.top_n,
            skip_validation: self.skip_validation.then_some(true),
        }
    }

    /// Load config, run the pipeline, and render the metrics.
    pub fn run(&self) -> Result<String, PipelineError> {
        let config = VulnReportConfig::load(&self.config, Some(&self.overrides()))?;
        let dispatcher = EventDispatcher::with_handler(Arc::new(TracingHandler));
        let output = Pipeline::new(config)
            .with_dispatcher(dispatcher)
            .run_file(&self.input)?;

        let reporter: Box<dyn Reporter> = match self.format.as_str() {
            "console" => Box::new(ConsoleReporter::new(!self.no_color)),
            other => create_reporter(other).ok_or_else(|| MetricsError::Serialization {
                message: format!("unknown format `{other}`"),
            })?,
        };
        Ok(reporter.generate(&output.metrics)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: &str = r#"<NessusClientData_v2>
  <Policy><policyName>Basic</policyName></Policy>
  <Report name="cli">
    <ReportHost name="10.0.0.5">
      <HostProperties>
        <tag name="HOST_START">start</tag>
        <tag name="HOST_END">end</tag>
      </HostProperties>
      <ReportItem port="22" protocol="tcp" severity="4" pluginID="1" pluginName="Critical thing" pluginFamily="General">
        <description>bad</description>
      </ReportItem>
    </ReportHost>
  </Report>
</NessusClientData_v2>"#;

    fn write_report(dir: &std::path::Path) -> PathBuf {
        let path = dir.join("scan.nessus");
        std::fs::write(&path, REPORT).unwrap();
        path
    }

    #[test]
    fn parses_flags_into_overrides() {
        let cli = Cli::try_parse_from([
            "vulnreport",
            "scan.nessus",
            "--format",
            "json",
            "--critical-kpis",
            "--top-n",
            "3",
        ])
        .unwrap();
        assert_eq!(cli.format, "json");
        let overrides = cli.overrides();
        assert_eq!(overrides.critical_kpis, Some(true));
        assert_eq!(overrides.include_informational, None);
        assert_eq!(overrides.top_n, Some(3));
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Cli::try_parse_from(["vulnreport", "x", "--format", "sarif"]).is_err());
    }

    #[test]
    fn json_run_produces_metrics() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_report(dir.path());
        let cli = Cli::try_parse_from([
            "vulnreport".into(),
            input.into_os_string(),
            "--format".into(),
            "json".into(),
            "--config".into(),
            dir.path().as_os_str().to_owned(),
        ])
        .unwrap();
        let output = cli.run().unwrap();
        assert!(output.contains("\"unique_vulnerabilities\": 1"));
        assert!(output.contains("10.0.0.5"));
    }

    #[test]
    fn missing_input_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::try_parse_from([
            "vulnreport".into(),
            dir.path().join("none.nessus").into_os_string(),
            "--config".into(),
            dir.path().as_os_str().to_owned(),
        ])
        .unwrap();
        let err = cli.run().unwrap_err();
        assert!(matches!(err, PipelineError::Io { .. }));
    }
}
