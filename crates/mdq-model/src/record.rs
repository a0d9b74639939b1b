//! Raw and normalized master-data records.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Canonical calendar date format (`YYYY-MM-DD`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The six columns every input must provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Id,
    Name,
    Email,
    Role,
    StartDate,
    Active,
}

/// Required fields in canonical column order.
pub const REQUIRED_FIELDS: [Field; 6] = [
    Field::Id,
    Field::Name,
    Field::Email,
    Field::Role,
    Field::StartDate,
    Field::Active,
];

impl Field {
    /// Column name as it appears in input and output files.
    pub fn column_name(self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Name => "name",
            Field::Email => "email",
            Field::Role => "role",
            Field::StartDate => "start_date",
            Field::Active => "active",
        }
    }

    /// Looks up a field by its column name.
    pub fn from_column_name(name: &str) -> Option<Self> {
        REQUIRED_FIELDS
            .into_iter()
            .find(|field| field.column_name() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

/// An untyped input cell.
///
/// The loader produces these; the normalizer turns them into typed fields
/// and nothing downstream sees them.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawValue {
    Text(String),
    Integer(i64),
    Float(f64),
    #[default]
    Null,
}

impl RawValue {
    pub fn is_null(&self) -> bool {
        matches!(self, RawValue::Null)
    }

    /// String form of the cell, `None` for null.
    pub fn as_text(&self) -> Option<String> {
        match self {
            RawValue::Text(value) => Some(value.clone()),
            RawValue::Integer(value) => Some(value.to_string()),
            RawValue::Float(value) => Some(format_float(*value)),
            RawValue::Null => None,
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Integer(value)
    }
}

impl From<Option<&str>> for RawValue {
    fn from(value: Option<&str>) -> Self {
        value.map_or(RawValue::Null, RawValue::from)
    }
}

/// Formats a float without a trailing `.0` for whole numbers.
fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// One input row restricted to the required fields.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawRecord {
    /// 1-based data row number in the source file (header excluded).
    pub row: usize,
    pub id: RawValue,
    pub name: RawValue,
    pub email: RawValue,
    pub role: RawValue,
    pub start_date: RawValue,
    pub active: RawValue,
}

impl RawRecord {
    pub fn new(row: usize) -> Self {
        Self {
            row,
            ..Self::default()
        }
    }

    pub fn value(&self, field: Field) -> &RawValue {
        match field {
            Field::Id => &self.id,
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Role => &self.role,
            Field::StartDate => &self.start_date,
            Field::Active => &self.active,
        }
    }

    pub fn set(&mut self, field: Field, value: RawValue) {
        let slot = match field {
            Field::Id => &mut self.id,
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Role => &mut self.role,
            Field::StartDate => &mut self.start_date,
            Field::Active => &mut self.active,
        };
        *slot = value;
    }

    /// Builder-style setter used by tests and fixtures.
    #[must_use]
    pub fn with(mut self, field: Field, value: impl Into<RawValue>) -> Self {
        self.set(field, value.into());
        self
    }
}

/// A normalized record.
///
/// `id` keeps an empty string distinct from null; the other text fields are
/// never empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    pub row: usize,
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub active: Option<bool>,
}

impl Record {
    /// `start_date` rendered in canonical form.
    pub fn start_date_text(&self) -> Option<String> {
        self.start_date
            .map(|date| date.format(DATE_FORMAT).to_string())
    }

    /// Cell text for the given field, as written to output files.
    pub fn cell(&self, field: Field) -> Option<String> {
        match field {
            Field::Id => self.id.clone(),
            Field::Name => self.name.clone(),
            Field::Email => self.email.clone(),
            Field::Role => self.role.clone(),
            Field::StartDate => self.start_date_text(),
            Field::Active => self.active.map(|flag| flag.to_string()),
        }
    }

    /// Non-empty trimmed identifier, if any.
    pub fn identifier(&self) -> Option<&str> {
        self.id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

impl From<&Record> for RawRecord {
    /// Renders a normalized record back into text cells.
    fn from(record: &Record) -> Self {
        let mut raw = RawRecord::new(record.row);
        for field in REQUIRED_FIELDS {
            raw.set(field, record.cell(field).map_or(RawValue::Null, RawValue::Text));
        }
        raw
    }
}
