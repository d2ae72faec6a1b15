//! Unique-vulnerability deduplication on (plugin id, asset ip).

use rustc_hash::FxHashSet;
use vulnreport_core::types::{DedupKey, Finding};

/// Keeps the first finding seen for each (plugin id, asset ip) pair,
/// preserving first-occurrence order. Port and protocol are ignored.
pub fn deduplicate<'a>(findings: &[&'a Finding]) -> Vec<&'a Finding> {
    let mut seen: FxHashSet<DedupKey<'a>> = FxHashSet::default();
    findings
        .iter()
        .copied()
        .filter(|&f| seen.insert(f.dedup_key()))
        .collect()
}
