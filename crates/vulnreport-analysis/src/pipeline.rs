//! Pipeline: load → parse → extract → validate → aggregate.
//!
//! Each run is an isolated invocation over one document; nothing carries
//! over between runs except the configuration and the diagnostics sink.

use std::path::Path;
use std::time::Instant;

use vulnreport_core::constants::NOT_AVAILABLE;
use vulnreport_core::errors::{ParseError, PipelineError};
use vulnreport_core::tracing::fields;
use vulnreport_core::types::ExtractedReport;
use vulnreport_core::{EventDispatcher, VulnReportConfig};

use crate::document::XmlDocument;
use crate::extraction::Extractor;
use crate::metrics::{MetricsAggregator, MetricsReport};
use crate::validation::Validator;

/// A complete result: the extracted collections and the metrics derived
/// from them.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutput {
    pub extracted: ExtractedReport,
    pub metrics: MetricsReport,
}

#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: VulnReportConfig,
    dispatcher: EventDispatcher,
}

impl Pipeline {
    pub fn new(config: VulnReportConfig) -> Self {
        Self {
            config,
            dispatcher: EventDispatcher::new(),
        }
    }

    pub fn with_dispatcher(mut self, dispatcher: EventDispatcher) -> Self {
        self.dispatcher = dispatcher;
        self
    }

    pub fn config(&self) -> &VulnReportConfig {
        &self.config
    }

    pub fn run_file(&self, path: &Path) -> Result<AnalysisOutput, PipelineError> {
        let bytes = std::fs::read(path).map_err(|source| PipelineError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "document loaded");
        self.run_document(parse_timed(bytes.len(), || XmlDocument::parse_bytes(&bytes))?)
    }

    pub fn run_str(&self, input: &str) -> Result<AnalysisOutput, PipelineError> {
        self.run_document(parse_timed(input.len(), || XmlDocument::parse(input))?)
    }

    /// Either a complete metrics result or an error naming the failed stage;
    /// never a partial metrics snapshot.
    pub fn run_document(&self, doc: XmlDocument) -> Result<AnalysisOutput, PipelineError> {
        let start = Instant::now();
        let aggregator = MetricsAggregator::new(&self.config.analysis, &self.dispatcher)?;

        let extracted = Extractor::new(&self.config.extraction, &self.dispatcher).extract(&doc);

        if self.config.validation.effective_enabled() {
            let validator = Validator::new(&self.config.validation, &self.dispatcher);
            if let Err(error) = validator.validate(&extracted) {
                return Err(PipelineError::Validation {
                    error,
                    extracted: Box::new(extracted),
                });
            }
        } else {
            tracing::debug!("validation disabled, aggregating extractor output directly");
        }

        let metrics = aggregator.aggregate(&extracted.findings, &extracted.assets);
        metrics.check_consistency()?;

        let scan_name = extracted
            .scan_metadata()
            .and_then(|m| m.scan_name.as_deref())
            .unwrap_or(NOT_AVAILABLE);
        tracing::info!(
            scan = scan_name,
            assets = extracted.assets.len(),
            unique = metrics.unique_vulnerabilities,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "analysis complete"
        );
        Ok(AnalysisOutput { extracted, metrics })
    }
}

fn parse_timed(
    document_bytes: usize,
    parse: impl FnOnce() -> Result<XmlDocument, ParseError>,
) -> Result<XmlDocument, ParseError> {
    let start = Instant::now();
    let result = parse();
    tracing::debug!(
        { fields::DOCUMENT_BYTES } = document_bytes,
        { fields::PARSE_TIME_MS } = start.elapsed().as_millis() as u64,
        ok = result.is_ok(),
        "document parsed"
    );
    result
}
