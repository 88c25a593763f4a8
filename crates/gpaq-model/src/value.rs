//! Cell parsing: a measurement cell is either absent or a number.

/// Tokens spreadsheet and statistics exports use for a missing answer.
const MISSING_TOKENS: &[&str] = &[
    "", "NA", "N/A", "n/a", "NaN", "nan", "NAN", "null", "NULL", "None", "#N/A", ".",
];

/// A cell that is neither empty nor numeric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonNumericCell(pub String);

/// Returns true if the (trimmed) value denotes a missing answer.
pub fn is_missing_token(value: &str) -> bool {
    MISSING_TOKENS.contains(&value.trim())
}

/// Parse a raw measurement cell.
///
/// Returns `Ok(None)` for empty / missing cells, `Ok(Some(n))` for numbers and
/// `Err` for anything else.
pub fn parse_cell(raw: &str) -> Result<Option<f64>, NonNumericCell> {
    let trimmed = raw.trim();
    if is_missing_token(trimmed) {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| NonNumericCell(trimmed.to_string()))
}

/// Formats a number without a trailing `.0` for integral values.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.');
        if trimmed.is_empty() {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    } else {
        s
    }
}
