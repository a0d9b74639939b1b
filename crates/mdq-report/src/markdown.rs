//! Markdown run report.

use tracing::debug;

use mdq_model::InvalidRecord;

use crate::frequency::{TOP_ERROR_LIMIT, top_error_frequencies};

/// Breakdown entry written when nothing was rejected.
pub const NO_ERRORS_PLACEHOLDER: &str = "keine";

/// Renders the run report.
///
/// `valid_count` is the size of the final (deduplicated) valid set. Lines
/// are joined with `\n` and the document has no trailing newline.
pub fn render_report(valid_count: usize, invalid: &[InvalidRecord]) -> String {
    let top = top_error_frequencies(invalid, TOP_ERROR_LIMIT);
    debug!(
        valid = valid_count,
        invalid = invalid.len(),
        ranked = top.len(),
        "rendering report"
    );

    let mut lines = vec![
        "# Stammdaten-Report".to_string(),
        String::new(),
        format!("- Gültige Datensätze: **{valid_count}**"),
        format!("- Ungültige Datensätze: **{}**", invalid.len()),
        String::new(),
        format!("## Fehlerübersicht (Top {TOP_ERROR_LIMIT})"),
    ];
    if top.is_empty() {
        lines.push(format!("- {NO_ERRORS_PLACEHOLDER}"));
    } else {
        lines.extend(top.iter().map(|entry| format!("- {entry}")));
    }
    lines.join("\n")
}
