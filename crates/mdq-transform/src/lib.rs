//! Master-data normalization.
//!
//! Turns raw loaded rows into typed [`Record`]s:
//!
//! - **strings**: `id`, `name`, `email`, `role` trimming and whitespace cleanup
//! - **boolean**: `active` to a tri-state flag
//! - **datetime**: `start_date` to a calendar date
//!
//! Field-level parse failures become `None` and are reported later by the
//! validator; nothing here can fail.

pub mod normalization;

use tracing::trace;

use mdq_model::{RawRecord, Record};

pub use normalization::{
    collapse_whitespace_runs, format_date, normalize_date, normalize_id, normalize_name,
    normalize_text, parse_bool, parse_date,
};

/// Normalizes one raw record.
pub fn normalize_record(raw: &RawRecord) -> Record {
    Record {
        row: raw.row,
        id: normalize_id(&raw.id),
        name: normalize_name(&raw.name),
        email: normalize_text(&raw.email),
        role: normalize_text(&raw.role),
        start_date: normalize_date(&raw.start_date),
        active: parse_bool(&raw.active),
    }
}

/// Normalizes a batch, preserving order.
pub fn normalize_records(raw: &[RawRecord]) -> Vec<Record> {
    let records: Vec<Record> = raw.iter().map(normalize_record).collect();
    trace!(records = records.len(), "normalized batch");
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use mdq_model::{Field, RawValue};

    #[test]
    fn normalizes_every_field() {
        let raw = RawRecord::new(1)
            .with(Field::Id, " 7 ")
            .with(Field::Name, "Ann  Lee")
            .with(Field::Email, " a@b.com ")
            .with(Field::Role, "eng")
            .with(Field::StartDate, "15.05.2023")
            .with(Field::Active, "yes");

        let record = normalize_record(&raw);

        assert_eq!(record.row, 1);
        assert_eq!(record.id.as_deref(), Some("7"));
        assert_eq!(record.name.as_deref(), Some("Ann Lee"));
        assert_eq!(record.email.as_deref(), Some("a@b.com"));
        assert_eq!(record.role.as_deref(), Some("eng"));
        assert_eq!(record.start_date, NaiveDate::from_ymd_opt(2023, 5, 15));
        assert_eq!(record.active, Some(true));
    }

    #[test]
    fn unparseable_fields_become_none() {
        let raw = RawRecord::new(2)
            .with(Field::Id, RawValue::Null)
            .with(Field::Name, "   ")
            .with(Field::StartDate, "")
            .with(Field::Active, "maybe");

        let record = normalize_record(&raw);

        assert_eq!(record.id, None);
        assert_eq!(record.name, None);
        assert_eq!(record.email, None);
        assert_eq!(record.start_date, None);
        assert_eq!(record.active, None);
    }

    #[test]
    fn batch_order_is_preserved() {
        let raw: Vec<RawRecord> = (1..=3)
            .map(|row| RawRecord::new(row).with(Field::Id, RawValue::Integer(row as i64)))
            .collect();
        let records = normalize_records(&raw);
        let ids: Vec<Option<&str>> = records.iter().map(|r| r.id.as_deref()).collect();
        assert_eq!(ids, vec![Some("1"), Some("2"), Some("3")]);
    }
}
