//! The fixed rule set.
//!
//! Each check looks at one normalized record only, never at the batch.

use std::sync::LazyLock;

use regex::Regex;

use mdq_model::{Record, Rule};

/// `local@domain.tld`: no whitespace or extra `@`, at least one dot after the `@`.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("Invalid e-mail regex")
});

/// Returns true if the address has the `local@domain.tld` shape.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Returns true if `record` violates `rule`.
pub fn violates(rule: Rule, record: &Record) -> bool {
    match rule {
        Rule::MissingId => record.identifier().is_none(),
        Rule::MissingName => record.name.is_none(),
        Rule::InvalidEmail => !record.email.as_deref().is_some_and(is_valid_email),
        Rule::MissingRole => record.role.is_none(),
        Rule::InvalidStartDate => record.start_date.is_none(),
        Rule::InvalidActive => record.active.is_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last+tag@mail.example.org"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("a@@c.de"));
        assert!(!is_valid_email("@c.de"));
        assert!(!is_valid_email("a@c."));
        assert!(!is_valid_email("a@b.com\n"));
    }

    #[test]
    fn missing_id_covers_null_and_blank() {
        let mut record = Record::default();
        assert!(violates(Rule::MissingId, &record));
        record.id = Some(String::new());
        assert!(violates(Rule::MissingId, &record));
        record.id = Some("7".to_string());
        assert!(!violates(Rule::MissingId, &record));
    }

    #[test]
    fn null_email_is_invalid() {
        let record = Record::default();
        assert!(violates(Rule::InvalidEmail, &record));
    }
}
