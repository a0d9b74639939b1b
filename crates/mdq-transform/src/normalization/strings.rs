//! Text field normalization.

use std::sync::LazyLock;

use mdq_model::RawValue;
use regex::Regex;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("Invalid whitespace regex"));

/// Trims a cell; empty results and nulls become `None`.
pub fn normalize_text(value: &RawValue) -> Option<String> {
    let text = value.as_text()?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Like [`normalize_text`], and collapses internal whitespace runs.
pub fn normalize_name(value: &RawValue) -> Option<String> {
    normalize_text(value).map(|name| collapse_whitespace_runs(&name))
}

/// Trims an identifier cell.
///
/// An empty identifier stays `Some("")` so the validator can report it as
/// `missing_id`; only a null cell yields `None`.
pub fn normalize_id(value: &RawValue) -> Option<String> {
    value.as_text().map(|id| id.trim().to_string())
}

/// Replaces every run of two or more whitespace characters with one space.
///
/// A single whitespace character is left as it is.
pub fn collapse_whitespace_runs(value: &str) -> String {
    WHITESPACE_RUN.replace_all(value, " ").into_owned()
}
