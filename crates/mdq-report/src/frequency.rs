//! Rule frequency ranking.

use std::cmp::Reverse;
use std::fmt;

use mdq_model::{InvalidRecord, Rule};

/// Number of rules listed in the report breakdown.
pub const TOP_ERROR_LIMIT: usize = 5;

/// How often one rule was violated across the invalid set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorFrequency {
    pub rule: Rule,
    pub count: usize,
}

impl fmt::Display for ErrorFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.rule, self.count)
    }
}

/// Counts every violated rule and returns the `limit` most frequent.
///
/// Ordering is by descending count. Rules with equal counts keep the order
/// in which they were first encountered while scanning `invalid`.
pub fn top_error_frequencies(invalid: &[InvalidRecord], limit: usize) -> Vec<ErrorFrequency> {
    let mut counts: Vec<ErrorFrequency> = Vec::new();
    for rule in invalid
        .iter()
        .flat_map(|record| record.outcome.violations.iter().copied())
    {
        match counts.iter_mut().find(|entry| entry.rule == rule) {
            Some(entry) => entry.count += 1,
            None => counts.push(ErrorFrequency { rule, count: 1 }),
        }
    }
    counts.sort_by_key(|entry| Reverse(entry.count));
    counts.truncate(limit);
    counts
}
