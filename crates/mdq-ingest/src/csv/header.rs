//! CSV header parsing and normalization.

/// Normalizes a header value: trims whitespace and a leading UTF-8 BOM.
pub fn normalize_header(value: &str) -> String {
    value.trim().trim_start_matches('\u{feff}').trim().to_string()
}

/// Parses a CSV header line into normalized column names, handling quoted values.
pub fn parse_header_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if !in_quotes => {
                in_quotes = true;
            }
            '"' if in_quotes => {
                // Check for escaped quote ("")
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            ',' if !in_quotes => {
                fields.push(normalize_header(&current));
                current.clear();
            }
            '\r' | '\n' if !in_quotes => {}
            _ => {
                current.push(c);
            }
        }
    }

    fields.push(normalize_header(&current));
    fields
}
