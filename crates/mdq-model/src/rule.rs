use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named data-quality check over a normalized record.
///
/// Variant order is the order rules appear in an error descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    MissingId,
    MissingName,
    InvalidEmail,
    MissingRole,
    InvalidStartDate,
    InvalidActive,
}

impl Rule {
    /// All rules in descriptor order.
    pub const ALL: [Rule; 6] = [
        Rule::MissingId,
        Rule::MissingName,
        Rule::InvalidEmail,
        Rule::MissingRole,
        Rule::InvalidStartDate,
        Rule::InvalidActive,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Rule::MissingId => "missing_id",
            Rule::MissingName => "missing_name",
            Rule::InvalidEmail => "invalid_email",
            Rule::MissingRole => "missing_role",
            Rule::InvalidStartDate => "invalid_start_date",
            Rule::InvalidActive => "invalid_active",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rule::ALL
            .into_iter()
            .find(|rule| rule.as_str() == s.trim())
            .ok_or_else(|| format!("unknown rule: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_names_round_trip() {
        for rule in Rule::ALL {
            assert_eq!(rule.as_str().parse::<Rule>(), Ok(rule));
        }
        assert!("missing_email".parse::<Rule>().is_err());
    }

    #[test]
    fn serde_uses_rule_names() {
        let json = serde_json::to_string(&Rule::InvalidStartDate).expect("serialize rule");
        assert_eq!(json, "\"invalid_start_date\"");
    }
}
