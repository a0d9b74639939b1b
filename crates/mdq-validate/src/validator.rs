//! Record validation and valid/invalid partitioning.

use tracing::debug;

use mdq_model::{InvalidRecord, Partition, Record, Rule, ValidationOutcome};

use crate::rules::violates;

/// Checks every rule against `record`, in descriptor order.
///
/// All rules are evaluated; one failure does not hide another.
pub fn validate_record(record: &Record) -> ValidationOutcome {
    ValidationOutcome {
        violations: Rule::ALL
            .into_iter()
            .filter(|rule| violates(*rule, record))
            .collect(),
    }
}

/// Splits records into valid and invalid sets, each in input order.
pub fn partition_records(records: Vec<Record>) -> Partition {
    let mut partition = Partition::default();
    for record in records {
        let outcome = validate_record(&record);
        if outcome.is_valid() {
            partition.valid.push(record);
        } else {
            debug!(
                row = record.row,
                errors = %outcome.descriptor(),
                "record rejected"
            );
            partition.invalid.push(InvalidRecord { record, outcome });
        }
    }
    partition
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn valid_record(row: usize, id: &str) -> Record {
        Record {
            row,
            id: Some(id.to_string()),
            name: Some("Ann Lee".to_string()),
            email: Some("a@b.com".to_string()),
            role: Some("eng".to_string()),
            start_date: NaiveDate::from_ymd_opt(2023, 5, 15),
            active: Some(true),
        }
    }

    #[test]
    fn complete_record_is_valid() {
        let outcome = validate_record(&valid_record(1, "7"));
        assert!(outcome.is_valid());
        assert_eq!(outcome.descriptor(), "");
    }

    #[test]
    fn empty_record_violates_everything_in_order() {
        let outcome = validate_record(&Record::default());
        assert_eq!(outcome.violations, Rule::ALL.to_vec());
        assert_eq!(
            outcome.descriptor(),
            "missing_id;missing_name;invalid_email;missing_role;invalid_start_date;invalid_active"
        );
    }

    #[test]
    fn partition_keeps_relative_order() {
        let mut broken = valid_record(2, "8");
        broken.email = Some("nope".to_string());
        let records = vec![valid_record(1, "7"), broken, valid_record(3, "9")];

        let partition = partition_records(records);

        let valid_rows: Vec<usize> = partition.valid.iter().map(|r| r.row).collect();
        assert_eq!(valid_rows, vec![1, 3]);
        assert_eq!(partition.invalid.len(), 1);
        assert_eq!(partition.invalid[0].record.row, 2);
        assert_eq!(partition.invalid[0].descriptor(), "invalid_email");
    }
}
