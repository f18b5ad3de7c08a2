//! Delimited text reading with compound header decoding.

use std::path::Path;

use csv::ReaderBuilder;
use survey_model::{CellValue, ColumnHeader, Row, Table};

use crate::error::{IngestError, Result};
use crate::header::{split_header, strip_bom};
use crate::options::ParserOptions;

/// Reads an export held in memory.
///
/// The first row is the header row and the first column is the row key; its
/// header is kept raw as `index_name`. Every other header is split into id and
/// title. Cells are kept as text, empty cells become `Missing`. Rows with a
/// different number of fields than the header, and input that ends inside a
/// quoted field, are rejected.
pub fn read_survey_table(content: &str, options: &ParserOptions) -> Result<Table<ColumnHeader>> {
    if content.is_empty() {
        return Ok(Table::default());
    }

    let delimiter = options.delimiter_byte()?;
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(false)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    let mut raw_headers = headers.iter();
    let index_name = raw_headers.next().map(strip_bom).unwrap_or_default();
    let columns: Vec<ColumnHeader> = raw_headers
        .map(|raw| split_header(raw, &options.header_separator))
        .collect();

    let mut table = Table::new(index_name, columns);
    let mut last_record_start = 0;
    for record in reader.records() {
        let record = record?;
        if let Some(position) = record.position() {
            last_record_start = position.byte();
        }
        let mut fields = record.iter();
        let key = fields.next().unwrap_or_default().to_string();
        let cells = fields.map(CellValue::from_raw).collect();
        table.push_row(Row { key, cells });
    }
    check_closed_quotes(content, last_record_start, delimiter)?;

    tracing::debug!(
        columns = table.width(),
        rows = table.height(),
        "read survey table"
    );
    Ok(table)
}

/// Fails when the record starting at byte `record_start` runs into the end of
/// `content` inside a quoted field.
///
/// The csv reader accepts such input and returns the rest of the text as one
/// field. An unterminated quote swallows every later line, so it always
/// lands in the last record and only that record needs scanning.
pub fn check_closed_quotes(content: &str, record_start: u64, delimiter: u8) -> Result<()> {
    let start = usize::try_from(record_start).unwrap_or(content.len());
    let tail = content.as_bytes().get(start..).unwrap_or_default();
    if ends_inside_quotes(tail, delimiter) {
        return Err(IngestError::Csv {
            message: format!("unterminated quoted field starting in the record at byte {start}"),
        });
    }
    Ok(())
}

/// Follows the quoting rules of the csv reader over `bytes`, which must
/// start at the beginning of a record.
fn ends_inside_quotes(bytes: &[u8], delimiter: u8) -> bool {
    let mut in_quotes = false;
    let mut field_start = true;
    let mut iter = bytes.iter().copied().peekable();
    while let Some(byte) = iter.next() {
        if in_quotes {
            if byte == b'"' {
                // `""` inside a quoted field is an escaped quote.
                if iter.peek() == Some(&b'"') {
                    iter.next();
                } else {
                    in_quotes = false;
                }
            }
        } else if byte == b'"' && field_start {
            in_quotes = true;
            field_start = false;
        } else {
            field_start = byte == delimiter || byte == b'\n' || byte == b'\r';
        }
    }
    in_quotes
}

/// Reads an export from disk. The file must be UTF-8.
pub fn read_survey_file(path: &Path, options: &ParserOptions) -> Result<Table<ColumnHeader>> {
    let content = read_export_text(path)?;
    read_survey_table(&content, options)
}

/// Loads the raw text of an export file.
pub fn read_export_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}
