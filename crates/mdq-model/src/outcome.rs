use crate::record::Record;
use crate::rule::Rule;

/// Separator between rule names in an error descriptor.
pub const DESCRIPTOR_SEPARATOR: &str = ";";

/// The rules a single record violates, in descriptor order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub violations: Vec<Rule>,
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Semicolon-joined rule names, empty for a valid record.
    pub fn descriptor(&self) -> String {
        self.violations
            .iter()
            .copied()
            .map(Rule::as_str)
            .collect::<Vec<_>>()
            .join(DESCRIPTOR_SEPARATOR)
    }
}

/// A record routed to the invalid partition with its violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidRecord {
    pub record: Record,
    pub outcome: ValidationOutcome,
}

impl InvalidRecord {
    pub fn descriptor(&self) -> String {
        self.outcome.descriptor()
    }
}

/// Records split by validation result, each side in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    pub valid: Vec<Record>,
    pub invalid: Vec<InvalidRecord>,
}

impl Partition {
    pub fn len(&self) -> usize {
        self.valid.len() + self.invalid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valid.is_empty() && self.invalid.is_empty()
    }

    /// Every violated rule across the invalid set, one entry per violation.
    pub fn violation_tokens(&self) -> impl Iterator<Item = Rule> + '_ {
        self.invalid
            .iter()
            .flat_map(|invalid| invalid.outcome.violations.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_joins_in_order() {
        let outcome = ValidationOutcome {
            violations: vec![Rule::MissingName, Rule::InvalidActive],
        };
        assert!(!outcome.is_valid());
        assert_eq!(outcome.descriptor(), "missing_name;invalid_active");
        assert_eq!(ValidationOutcome::default().descriptor(), "");
    }

    #[test]
    fn violation_tokens_flatten_invalid_records() {
        let partition = Partition {
            valid: vec![Record::default()],
            invalid: vec![
                InvalidRecord {
                    record: Record::default(),
                    outcome: ValidationOutcome {
                        violations: vec![Rule::MissingId, Rule::InvalidEmail],
                    },
                },
                InvalidRecord {
                    record: Record::default(),
                    outcome: ValidationOutcome {
                        violations: vec![Rule::InvalidEmail],
                    },
                },
            ],
        };
        assert_eq!(partition.len(), 3);
        let tokens: Vec<Rule> = partition.violation_tokens().collect();
        assert_eq!(
            tokens,
            vec![Rule::MissingId, Rule::InvalidEmail, Rule::InvalidEmail]
        );
    }
}
