//! Server matchers.
//!
//! Each criterion scans the full record list and returns every record whose
//! field contains a match for the pattern (regex search, not anchored).
//!
//! The group matcher yields one entry per matching group, so a server in two
//! matching groups shows up twice. The combiner counts appearances, which
//! means such a server can satisfy the intersection count on the group
//! criterion alone. This is existing behavior and is kept as is.

use std::fmt;

use regex::Regex;

use crate::error::LookupError;
use crate::servers::ServerRecord;

/// A filter dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    Name,
    Group,
    Address,
}

impl Criterion {
    /// All criteria, in the order their results are concatenated
    pub const ALL: [Criterion; 3] = [Criterion::Name, Criterion::Group, Criterion::Address];

    pub fn as_str(self) -> &'static str {
        match self {
            Criterion::Name => "name",
            Criterion::Group => "group",
            Criterion::Address => "address",
        }
    }

    /// Run this criterion's matcher
    pub fn find<'a>(
        self,
        records: &'a [ServerRecord],
        pattern: &str,
    ) -> Result<Vec<&'a ServerRecord>, LookupError> {
        match self {
            Criterion::Name => match_by_identifier(records, pattern),
            Criterion::Group => match_by_group(records, pattern),
            Criterion::Address => match_by_address(records, pattern),
        }
    }

    fn compile(self, pattern: &str) -> Result<Regex, LookupError> {
        Regex::new(pattern).map_err(|source| LookupError::InvalidPattern {
            criterion: self,
            pattern: pattern.to_string(),
            source,
        })
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Records whose identifier matches `pattern`
pub fn match_by_identifier<'a>(
    records: &'a [ServerRecord],
    pattern: &str,
) -> Result<Vec<&'a ServerRecord>, LookupError> {
    let re = Criterion::Name.compile(pattern)?;
    Ok(records
        .iter()
        .filter(|r| re.is_match(&r.identifier))
        .collect())
}

/// One entry per (record, matching group) pair
pub fn match_by_group<'a>(
    records: &'a [ServerRecord],
    pattern: &str,
) -> Result<Vec<&'a ServerRecord>, LookupError> {
    let re = Criterion::Group.compile(pattern)?;
    let mut results = Vec::new();
    for r in records {
        for g in &r.groups {
            if re.is_match(g) {
                results.push(r);
            }
        }
    }
    Ok(results)
}

/// Records whose address matches `pattern`
pub fn match_by_address<'a>(
    records: &'a [ServerRecord],
    pattern: &str,
) -> Result<Vec<&'a ServerRecord>, LookupError> {
    let re = Criterion::Address.compile(pattern)?;
    Ok(records
        .iter()
        .filter(|r| re.is_match(&r.address))
        .collect())
}

/// Concatenated output of every requested criterion
#[derive(Debug, Default)]
pub struct MatchSet<'a> {
    pub matches: Vec<&'a ServerRecord>,
    /// Number of criteria requested, including ones whose pattern failed
    pub required: usize,
    pub warnings: Vec<LookupError>,
}

impl<'a> MatchSet<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one criterion and append its results.
    ///
    /// An invalid pattern is recorded as a warning and contributes nothing,
    /// but the criterion still counts as requested.
    pub fn add(&mut self, records: &'a [ServerRecord], criterion: Criterion, pattern: &str) {
        self.required += 1;
        match criterion.find(records, pattern) {
            Ok(found) => {
                log::debug!(
                    "{} pattern '{}' matched {} entries",
                    criterion,
                    pattern,
                    found.len()
                );
                self.matches.extend(found);
            }
            Err(e) => {
                // Reported to the user through `warnings`
                log::debug!("{}", e);
                self.warnings.push(e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server(identifier: &str, address: &str, groups: &[&str]) -> ServerRecord {
        ServerRecord {
            identifier: identifier.to_string(),
            address: address.to_string(),
            groups: groups.iter().map(|g| g.to_string()).collect(),
            ..Default::default()
        }
    }

    fn sample() -> Vec<ServerRecord> {
        vec![
            server("dm1", "frag.gr:27910", &["dm", "eu"]),
            server("dm2", "10.0.0.5:27911", &["dm"]),
            server("tourney", "10.0.0.5:27920", &["duel", "dm-cup"]),
        ]
    }

    fn ids(records: &[&ServerRecord]) -> Vec<String> {
        records.iter().map(|r| r.identifier.clone()).collect()
    }

    #[test]
    fn test_match_by_identifier_is_unanchored() {
        let records = sample();
        let found = match_by_identifier(&records, "m").unwrap();
        assert_eq!(ids(&found), vec!["dm1", "dm2"]);

        let found = match_by_identifier(&records, "^dm\\d$").unwrap();
        assert_eq!(ids(&found), vec!["dm1", "dm2"]);
    }

    #[test]
    fn test_match_by_identifier_results_match_pattern() {
        let records = sample();
        let re = Regex::new("o").unwrap();
        let found = match_by_identifier(&records, "o").unwrap();
        assert!(!found.is_empty());
        for r in found {
            assert!(records.contains(r));
            assert!(re.is_match(&r.identifier));
        }
    }

    #[test]
    fn test_match_by_group_emits_once_per_matching_group() {
        let records = sample();
        let found = match_by_group(&records, "dm").unwrap();
        // tourney is in "dm-cup" only once; dm1 and dm2 once each
        assert_eq!(ids(&found), vec!["dm1", "dm2", "tourney"]);

        let found = match_by_group(&records, "^d").unwrap();
        assert_eq!(ids(&found), vec!["dm1", "dm2", "tourney", "tourney"]);
    }

    #[test]
    fn test_match_by_group_without_groups() {
        let records = vec![server("lonely", "1.2.3.4:27910", &[])];
        assert!(match_by_group(&records, ".*").unwrap().is_empty());
    }

    #[test]
    fn test_match_by_address() {
        let records = sample();
        let found = match_by_address(&records, r"^10\.0\.0\.5:").unwrap();
        assert_eq!(ids(&found), vec!["dm2", "tourney"]);
    }

    #[test]
    fn test_invalid_pattern() {
        let records = sample();
        let err = match_by_address(&records, "[").unwrap_err();
        match err {
            LookupError::InvalidPattern {
                criterion, pattern, ..
            } => {
                assert_eq!(criterion, Criterion::Address);
                assert_eq!(pattern, "[");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_match_set_keeps_going_after_invalid_pattern() {
        let records = sample();
        let mut set = MatchSet::new();
        set.add(&records, Criterion::Name, "(");
        set.add(&records, Criterion::Address, "27910");

        assert_eq!(set.required, 2);
        assert_eq!(set.warnings.len(), 1);
        assert_eq!(ids(&set.matches), vec!["dm1"]);
    }

    #[test]
    fn test_criterion_display() {
        let names: Vec<String> = Criterion::ALL.iter().map(|c| c.to_string()).collect();
        assert_eq!(names, vec!["name", "group", "address"]);
    }
}
