//! vulnreport-analysis: turns a host/plugin-oriented scanner XML report into
//! typed record collections, validates them, and derives deduplicated
//! security metrics.
//!
//! Data flow: document → [`extraction`] → [`validation`] → [`metrics`] →
//! [`reporters`]. [`pipeline::Pipeline`] runs the whole chain.

pub mod document;
pub mod extraction;
pub mod metrics;
pub mod pipeline;
pub mod reporters;
pub mod validation;

pub use document::{XmlDocument, XmlElement};
pub use extraction::Extractor;
pub use metrics::{MetricsAggregator, MetricsReport};
pub use pipeline::{AnalysisOutput, Pipeline};
pub use validation::Validator;
