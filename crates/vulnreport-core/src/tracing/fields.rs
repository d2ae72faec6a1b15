//! Structured span field names shared by the pipeline stages.
//!
//! Consistent names keep log queries stable across extraction, validation
//! and aggregation.

/// Number of host containers seen.
pub const HOST_COUNT: &str = "host_count";

/// Number of findings emitted by extraction.
pub const FINDING_COUNT: &str = "finding_count";

/// Document parse time in milliseconds.
pub const PARSE_TIME_MS: &str = "parse_time_ms";

/// Extraction time in milliseconds.
pub const EXTRACTION_TIME_MS: &str = "extraction_time_ms";

/// Metrics aggregation time in milliseconds.
pub const AGGREGATION_TIME_MS: &str = "aggregation_time_ms";

/// Input document size in bytes.
pub const DOCUMENT_BYTES: &str = "document_bytes";
