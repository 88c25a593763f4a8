//! Header row and delimiter detection.
//!
//! Questionnaire exports arrive with or without a one-row header. Labels are
//! never trusted; only the presence of a header matters, since columns are
//! remapped by position.

use gpaq_model::is_missing_token;

/// Delimiters accepted for input files, in preference order.
const DELIMITERS: [u8; 3] = [b',', b';', b'\t'];

#[derive(Debug, Default, Clone, Copy)]
struct RowStats {
    total: usize,
    non_empty: usize,
    numeric: usize,
}

fn row_stats(cells: &[String]) -> RowStats {
    let mut stats = RowStats {
        total: cells.len(),
        ..RowStats::default()
    };
    for cell in cells {
        let trimmed = cell.trim();
        if is_missing_token(trimmed) {
            continue;
        }
        stats.non_empty += 1;
        if trimmed.parse::<f64>().is_ok() {
            stats.numeric += 1;
        }
    }
    stats
}

/// Decide whether the first row of a file is a header.
///
/// The identifier column is ignored: IDs may be textual in data rows. A row is
/// a header when at least half of its measurement cells hold text. Item-number
/// labels such as `1,2,3a,3b` qualify through their lettered cells, while a
/// data row with a stray text answer stays data and is later rejected by the
/// schema check instead of being silently consumed as a header.
pub fn is_header_row(row: &[String]) -> bool {
    let Some(measurements) = row.get(1..) else {
        return false;
    };
    let stats = row_stats(measurements);
    if stats.total == 0 {
        return false;
    }
    let text = stats.non_empty - stats.numeric;
    text * 2 >= stats.total
}

/// Pick the delimiter that splits the first line into the most fields.
pub fn sniff_delimiter(first_line: &str) -> u8 {
    let mut best = DELIMITERS[0];
    let mut best_count = 0usize;
    for delimiter in DELIMITERS {
        let count = first_line.bytes().filter(|b| *b == delimiter).count();
        if count > best_count {
            best = delimiter;
            best_count = count;
        }
    }
    best
}
