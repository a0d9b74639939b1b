//! Tri-state boolean coercion.

use mdq_model::RawValue;

/// Lower-cased tokens read as `true`.
pub const TRUE_TOKENS: [&str; 4] = ["true", "1", "yes", "y"];

/// Lower-cased tokens read as `false`.
pub const FALSE_TOKENS: [&str; 4] = ["false", "0", "no", "n"];

/// Coerces a raw cell to `Some(true)`, `Some(false)` or `None` (unknown).
///
/// Unrecognized tokens are not an error here; the validator reports them.
/// A float cell never matches: its text (`1.0`) is not a token.
pub fn parse_bool(value: &RawValue) -> Option<bool> {
    if let RawValue::Float(_) = value {
        return None;
    }
    let text = value.as_text()?;
    let token = text.trim().to_lowercase();
    if TRUE_TOKENS.contains(&token.as_str()) {
        Some(true)
    } else if FALSE_TOKENS.contains(&token.as_str()) {
        Some(false)
    } else {
        None
    }
}
