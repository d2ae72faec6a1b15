//! Order-preserving grouping and stable top-N selection.

use rustc_hash::FxHashMap;
use vulnreport_core::constants::NOT_AVAILABLE;

/// Counts items per key. Groups come back in first-encountered order; an
/// absent key is grouped under the not-available sentinel.
pub fn group_counts<'a, T, F>(items: &[&'a T], key: F) -> Vec<(String, usize)>
where
    F: Fn(&'a T) -> Option<&'a str>,
{
    let mut index: FxHashMap<&str, usize> = FxHashMap::default();
    let mut groups: Vec<(String, usize)> = Vec::new();
    for &item in items {
        let name = key(item).unwrap_or(NOT_AVAILABLE);
        match index.get(name) {
            Some(&slot) => groups[slot].1 += 1,
            None => {
                index.insert(name, groups.len());
                groups.push((name.to_string(), 1));
            }
        }
    }
    groups
}

/// Orders groups by key, byte-wise ascending. Ranking afterwards breaks
/// count ties by key instead of by first appearance.
pub fn sort_by_key(mut groups: Vec<(String, usize)>) -> Vec<(String, usize)> {
    groups.sort_unstable_by(|a, b| a.0.cmp(&b.0));
    groups
}

/// Sorts groups by count descending; equal counts keep their group order.
/// `limit` truncates after sorting.
pub fn rank(mut groups: Vec<(String, usize)>, limit: Option<usize>) -> Vec<(String, usize)> {
    groups.sort_by(|a, b| b.1.cmp(&a.1));
    if let Some(limit) = limit {
        groups.truncate(limit);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_keep_first_seen_order() {
        let items = ["b", "a", "b", "c", "a", "b"];
        let refs: Vec<&&str> = items.iter().collect();
        let groups = group_counts(&refs, |s| Some(*s));
        assert_eq!(
            groups,
            vec![("b".to_string(), 3), ("a".to_string(), 2), ("c".to_string(), 1)]
        );
    }

    #[test]
    fn ties_keep_group_order_and_limit_applies() {
        let groups = vec![
            ("x".to_string(), 1),
            ("y".to_string(), 2),
            ("z".to_string(), 1),
            ("w".to_string(), 2),
        ];
        let ranked = rank(groups, Some(3));
        let names: Vec<&str> = ranked.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["y", "w", "x"]);
    }

    #[test]
    fn key_order_breaks_count_ties() {
        let groups = vec![
            ("10.0.0.9".to_string(), 1),
            ("10.0.0.10".to_string(), 1),
            ("10.0.0.2".to_string(), 2),
            ("10.0.0.1".to_string(), 1),
        ];
        let ranked = rank(sort_by_key(groups), Some(3));
        let names: Vec<&str> = ranked.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["10.0.0.2", "10.0.0.1", "10.0.0.10"]);
    }

    #[test]
    fn absent_key_uses_sentinel() {
        let items: [Option<&str>; 2] = [None, Some("a")];
        let refs: Vec<&Option<&str>> = items.iter().collect();
        let groups = group_counts(&refs, |o| *o);
        assert_eq!(groups[0], (NOT_AVAILABLE.to_string(), 1));
    }
}
