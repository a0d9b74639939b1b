//! Permissive calendar-date parsing.
//!
//! Start dates arrive in whatever form the source system exported. This
//! module accepts the common ones and reduces them to a [`NaiveDate`],
//! rendered canonically as `YYYY-MM-DD`.
//!
//! # Accepted forms
//!
//! - Year first: `2023-05-15`, `2023/05/15`, `2023.05.15`, `20230515`
//! - Day first: `15.05.2023`, `15/05/2023`, `15-05-2023`, `5.1.23`
//! - Date-times: `2023-05-15T08:30:00`, `15.05.2023 08:30`, RFC 3339 and
//!   RFC 2822 timestamps (the time of day is discarded)
//! - English month names: `15 May 2023`, `15-May-2023`, `May 15, 2023`,
//!   `Mon 15 May 2023`, `1st Sep 2021`, `2023-May-15`, `2023 May 15`
//!
//! # Ambiguity
//!
//! Numeric dates without a leading four-digit year are read day first. When
//! that reading is not a real date but the month-first reading is (for
//! example `05/25/2023`), the month-first reading is used. A leading
//! four-digit year always means year-month-day.
//!
//! Two-digit years map `00..=68` to 2000-2068 and `69..=99` to 1969-1999.

use chrono::{DateTime, NaiveDate, NaiveTime};

use mdq_model::{DATE_FORMAT, RawValue};

const DATE_SEPARATORS: [char; 3] = ['-', '.', '/'];

const TIME_FORMATS: [&str; 4] = ["%H:%M:%S%.f", "%H:%M", "%I:%M:%S %p", "%I:%M %p"];

const MONTHS: [(&str, u32); 12] = [
    ("january", 1),
    ("february", 2),
    ("march", 3),
    ("april", 4),
    ("may", 5),
    ("june", 6),
    ("july", 7),
    ("august", 8),
    ("september", 9),
    ("october", 10),
    ("november", 11),
    ("december", 12),
];

const WEEKDAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Normalizes a raw start-date cell.
///
/// Nulls, blank strings and anything unparseable become `None`; the
/// validator turns that into `invalid_start_date`.
pub fn normalize_date(value: &RawValue) -> Option<NaiveDate> {
    let text = value.as_text()?;
    parse_date(&text)
}

/// Formats a date in canonical `YYYY-MM-DD` form.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parses a date in any of the accepted forms.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    parse_numeric_date(trimmed)
        .or_else(|| parse_date_with_time(trimmed))
        .or_else(|| parse_timestamp(trimmed))
        .or_else(|| parse_textual_date(trimmed))
}

/// Maps a two-digit year into a four-digit year.
pub fn expand_two_digit_year(year: i32) -> i32 {
    if year <= 68 { 2000 + year } else { 1900 + year }
}

/// Parses purely numeric dates such as `2023-05-15`, `15.05.2023` or `20230515`.
fn parse_numeric_date(value: &str) -> Option<NaiveDate> {
    if value.len() == 8 && value.chars().all(|ch| ch.is_ascii_digit()) {
        return ymd(&value[0..4], &value[4..6], &value[6..8]);
    }

    let separator = value.chars().find(|ch| DATE_SEPARATORS.contains(ch))?;
    let parts: Vec<&str> = value.split(separator).collect();
    let [first, second, third] = parts.as_slice() else {
        return None;
    };
    if ![first, second, third].iter().all(|part| is_digits(part)) {
        return None;
    }

    if first.len() == 4 {
        if second.len() > 2 || third.len() > 2 {
            return None;
        }
        return ymd(first, second, third);
    }

    if first.len() > 2 || second.len() > 2 {
        return None;
    }
    let year = parse_year(third)?;
    let a: u32 = first.parse().ok()?;
    let b: u32 = second.parse().ok()?;
    NaiveDate::from_ymd_opt(year, b, a).or_else(|| NaiveDate::from_ymd_opt(year, a, b))
}

/// Parses `<date>T<time>` or `<date> <time>` where the date part is numeric.
fn parse_date_with_time(value: &str) -> Option<NaiveDate> {
    let (date, time) = value
        .split_once('T')
        .or_else(|| value.split_once(' '))?;
    if !is_time_of_day(time.trim()) {
        return None;
    }
    parse_numeric_date(date.trim())
}

/// Parses RFC 3339 and RFC 2822 timestamps, keeping the local date.
fn parse_timestamp(value: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(value)
        .or_else(|_| DateTime::parse_from_rfc2822(value))
        .ok()
        .map(|timestamp| timestamp.date_naive())
}

/// Parses dates with English month names.
fn parse_textual_date(value: &str) -> Option<NaiveDate> {
    let cleaned: String = value
        .chars()
        .map(|ch| if matches!(ch, ',' | '-' | '/' | '.') { ' ' } else { ch })
        .collect();
    let mut tokens: Vec<&str> = cleaned.split_whitespace().collect();

    if tokens.first().is_some_and(|token| is_weekday(token)) {
        tokens.remove(0);
    }
    if tokens.len() < 3 {
        return None;
    }
    let (date_tokens, rest) = tokens.split_at(3);
    if !rest.is_empty() && !is_time_of_day(&rest.join(" ")) {
        return None;
    }

    match date_tokens {
        [year, month, day] if year.len() == 4 && month_number(month).is_some() => {
            build_date(parse_year(year)?, month_number(month)?, parse_day(day)?)
        }
        [day, month, year] if month_number(month).is_some() => {
            build_date(parse_year(year)?, month_number(month)?, parse_day(day)?)
        }
        [month, day, year] if month_number(month).is_some() => {
            build_date(parse_year(year)?, month_number(month)?, parse_day(day)?)
        }
        _ => None,
    }
}

fn ymd(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    build_date(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

fn build_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|ch| ch.is_ascii_digit())
}

fn parse_year(value: &str) -> Option<i32> {
    if !is_digits(value) {
        return None;
    }
    let year: i32 = value.parse().ok()?;
    match value.len() {
        2 => Some(expand_two_digit_year(year)),
        4 => Some(year),
        _ => None,
    }
}

/// Day of month, allowing English ordinal suffixes (`1st`, `22nd`, `15th`).
fn parse_day(value: &str) -> Option<u32> {
    let lower = value.to_ascii_lowercase();
    let digits = ["st", "nd", "rd", "th"]
        .iter()
        .find_map(|suffix| lower.strip_suffix(suffix))
        .unwrap_or(&lower);
    if digits.len() > 2 || !is_digits(digits) {
        return None;
    }
    digits.parse().ok()
}

fn month_number(value: &str) -> Option<u32> {
    let lower = value.to_ascii_lowercase();
    if lower.len() < 3 {
        return None;
    }
    if lower == "sept" {
        return Some(9);
    }
    MONTHS
        .iter()
        .find(|(name, _)| *name == lower || (lower.len() == 3 && name.starts_with(&lower)))
        .map(|(_, number)| *number)
}

fn is_weekday(value: &str) -> bool {
    let lower = value.to_ascii_lowercase();
    lower.len() >= 3
        && WEEKDAYS
            .iter()
            .any(|day| *day == lower || (lower.len() == 3 && day.starts_with(&lower)))
}

fn is_time_of_day(value: &str) -> bool {
    let time = value.trim_end_matches('Z');
    TIME_FORMATS
        .iter()
        .any(|format| NaiveTime::parse_from_str(time, format).is_ok())
}
