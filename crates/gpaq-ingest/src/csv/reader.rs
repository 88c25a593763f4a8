//! CSV file reading with encoding and header detection.

use std::borrow::Cow;
use std::path::Path;

use ::csv::{ReaderBuilder, Trim};
use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};

use crate::error::{IngestError, Result};

use super::header::{is_header_row, sniff_delimiter};

/// Raw cells of one input file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    /// Header labels, when the file has a header row.
    pub headers: Option<Vec<String>>,
    /// Data rows, padded to [`CsvTable::width`].
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Number of columns: the widest of the header and every data row.
    pub fn width(&self) -> usize {
        let header_width = self.headers.as_ref().map_or(0, Vec::len);
        self.rows
            .iter()
            .map(Vec::len)
            .fold(header_width, usize::max)
    }
}

/// Decode file bytes to text.
///
/// Byte-order marks select UTF-8 or UTF-16; unmarked input is taken as UTF-8
/// when valid and as Windows-1252 otherwise. Returns the text and the name of
/// the encoding that was used.
pub fn decode_bytes(bytes: &[u8]) -> (Cow<'_, str>, &'static str) {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (text, _) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return (text, encoding.name());
    }
    match std::str::from_utf8(bytes) {
        Ok(text) => (Cow::Borrowed(text), UTF_8.name()),
        Err(_) => {
            let (text, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
            (text, WINDOWS_1252.name())
        }
    }
}

/// Reads a questionnaire file into raw cells.
///
/// Blank lines are skipped, the delimiter is sniffed from the first line and
/// a header row is detected with [`is_header_row`]. Rows shorter than the
/// table are padded with empty cells.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let bytes = std::fs::read(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let (text, encoding) = decode_bytes(&bytes);
    if encoding != UTF_8.name() {
        tracing::warn!(
            path = %path.display(),
            encoding,
            "file is not UTF-8; decoded with fallback encoding"
        );
    }

    let first_line = text.lines().find(|line| !line.trim().is_empty());
    let Some(first_line) = first_line else {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    };
    let delimiter = sniff_delimiter(first_line);

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let row: Vec<String> = record.iter().map(str::to_string).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }

    if raw_rows.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let headers = if is_header_row(&raw_rows[0]) {
        Some(raw_rows.remove(0))
    } else {
        None
    };

    let mut table = CsvTable {
        headers,
        rows: raw_rows,
    };
    let width = table.width();
    for row in &mut table.rows {
        row.resize(width, String::new());
    }
    Ok(table)
}
