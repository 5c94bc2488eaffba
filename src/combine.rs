//! Combining per-criterion matches into the final server list.

use std::collections::{HashMap, HashSet};

use crate::servers::ServerRecord;

/// How results from several criteria are merged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CombineMode {
    /// A server must satisfy every requested criterion
    #[default]
    Intersection,
    /// A server may satisfy any requested criterion
    Union,
}

impl CombineMode {
    pub fn from_union_flag(union: bool) -> Self {
        if union {
            CombineMode::Union
        } else {
            CombineMode::Intersection
        }
    }

    pub fn combine<'a>(
        self,
        matches: &[&'a ServerRecord],
        required: usize,
    ) -> Vec<&'a ServerRecord> {
        match self {
            CombineMode::Union => unique(matches),
            CombineMode::Intersection => intersection(matches, required),
        }
    }
}

/// Drop later entries that share an identifier with an earlier one
pub fn unique<'a>(matches: &[&'a ServerRecord]) -> Vec<&'a ServerRecord> {
    let mut seen = HashSet::new();
    let mut list = Vec::new();
    for &r in matches {
        if seen.insert(r.identifier.as_str()) {
            list.push(r);
        }
    }
    list
}

/// Servers whose identifier appears at least `required` times.
///
/// One entry per identifier, the first one seen, in first-seen order.
/// Requesting no criteria yields nothing.
pub fn intersection<'a>(matches: &[&'a ServerRecord], required: usize) -> Vec<&'a ServerRecord> {
    if required == 0 || matches.is_empty() {
        return Vec::new();
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for r in matches {
        *counts.entry(r.identifier.as_str()).or_default() += 1;
    }

    unique(matches)
        .into_iter()
        .filter(|r| counts[r.identifier.as_str()] >= required)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server(identifier: &str, address: &str) -> ServerRecord {
        ServerRecord {
            identifier: identifier.to_string(),
            address: address.to_string(),
            ..Default::default()
        }
    }

    fn ids(records: &[&ServerRecord]) -> Vec<String> {
        records.iter().map(|r| r.identifier.clone()).collect()
    }

    #[test]
    fn test_union_keeps_first_occurrence() {
        let first = server("dup", "1.1.1.1:1");
        let second = server("dup", "2.2.2.2:2");
        let other = server("other", "3.3.3.3:3");

        let result = unique(&[&first, &other, &second]);
        assert_eq!(ids(&result), vec!["dup", "other"]);
        assert_eq!(result[0].address, "1.1.1.1:1");
    }

    #[test]
    fn test_union_independent_of_criterion_order() {
        let a = server("a", "a:1");
        let b = server("b", "b:1");
        let c = server("c", "c:1");

        let names = vec![&a, &b];
        let groups = vec![&b, &c];

        let forward: HashSet<String> = ids(&unique(&[names.clone(), groups.clone()].concat()))
            .into_iter()
            .collect();
        let backward: HashSet<String> = ids(&unique(&[groups, names].concat()))
            .into_iter()
            .collect();
        assert_eq!(forward, backward);
        assert_eq!(forward.len(), 3);
    }

    #[test]
    fn test_intersection_requires_every_criterion() {
        let foo = server("foo", "1.2.3.4:27910");
        let bar = server("bar", "1.2.3.5:27910");

        // name matched foo and bar, group matched foo only
        let result = intersection(&[&foo, &bar, &foo], 2);
        assert_eq!(ids(&result), vec!["foo"]);
    }

    #[test]
    fn test_intersection_emits_single_entry() {
        let foo = server("foo", "1.2.3.4:27910");
        let result = intersection(&[&foo, &foo, &foo], 2);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_intersection_with_no_criteria_is_empty() {
        let foo = server("foo", "1.2.3.4:27910");
        assert!(intersection(&[&foo], 0).is_empty());
        assert!(CombineMode::Intersection.combine(&[&foo], 0).is_empty());
    }

    #[test]
    fn test_intersection_counts_group_duplicates() {
        // Two matching groups count as two appearances: existing quirk
        let foo = server("foo", "1.2.3.4:27910");
        let result = intersection(&[&foo, &foo], 2);
        assert_eq!(ids(&result), vec!["foo"]);
    }

    #[test]
    fn test_intersection_preserves_first_seen_order() {
        let a = server("a", "a:1");
        let b = server("b", "b:1");
        let result = intersection(&[&b, &a, &a, &b], 2);
        assert_eq!(ids(&result), vec!["b", "a"]);
    }

    #[test]
    fn test_mode_from_flag() {
        assert_eq!(CombineMode::from_union_flag(true), CombineMode::Union);
        assert_eq!(CombineMode::from_union_flag(false), CombineMode::Intersection);
        assert_eq!(CombineMode::default(), CombineMode::Intersection);
    }
}
