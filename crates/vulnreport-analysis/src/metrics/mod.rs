//! Metrics aggregation: severity filter → dedup → counts → rankings → KPIs.

pub mod aggregator;
pub mod dedup;
pub mod filter;
pub mod kpi;
pub mod ranking;
pub mod types;

pub use aggregator::MetricsAggregator;
pub use filter::SeverityPolicy;
pub use types::{AssetCount, FamilyCount, MetricsReport, NameCount};
