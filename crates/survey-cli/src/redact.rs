//! Column redaction for survey exports.
//!
//! Drops every column whose machine id contains one of the given substrings
//! (for example the question that collected e-mail addresses) and writes the
//! rest back out in the same delimited format, headers untouched. Nothing is
//! written unless the whole input parses.

use std::io::{Read, Write};

use csv::{ReaderBuilder, WriterBuilder};
use survey_ingest::{IngestError, ParserOptions, check_closed_quotes, split_header};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum RedactError {
    #[error("failed to process delimited text: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to read or write export: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Ingest(#[from] IngestError),
}

/// What a redaction pass removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedactSummary {
    /// Raw headers of the dropped columns, in source order.
    pub removed: Vec<String>,
    /// Number of columns written, including the row-key column.
    pub kept: usize,
    pub rows: usize,
}

/// True when the header's machine id contains any of `patterns`.
///
/// Headers without an id never match.
pub fn should_redact(raw_header: &str, patterns: &[String], separator: &str) -> bool {
    let header = split_header(raw_header, separator);
    header
        .id()
        .is_some_and(|id| patterns.iter().any(|pattern| id.contains(pattern.as_str())))
}

/// Copies `input` to `output` without the matching columns.
///
/// The first column is the row key and is always kept.
pub fn redact<R, W>(
    mut input: R,
    output: W,
    patterns: &[String],
    options: &ParserOptions,
) -> Result<RedactSummary, RedactError>
where
    R: Read,
    W: Write,
{
    let delimiter = options.delimiter_byte()?;
    let mut content = String::new();
    input.read_to_string(&mut content)?;

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(false)
        .from_reader(content.as_bytes());
    let headers = reader.headers()?.clone();
    let records = reader.records().collect::<Result<Vec<_>, _>>()?;
    let last_record_start = records
        .last()
        .and_then(|record| record.position())
        .map_or(0, |position| position.byte());
    check_closed_quotes(&content, last_record_start, delimiter)?;

    if headers.is_empty() {
        return Ok(RedactSummary::default());
    }

    let mut summary = RedactSummary::default();
    let mut keep = Vec::with_capacity(headers.len());
    for (idx, raw) in headers.iter().enumerate() {
        if idx > 0 && should_redact(raw, patterns, &options.header_separator) {
            debug!(column = raw, "redacting column");
            summary.removed.push(raw.to_string());
        } else {
            keep.push(idx);
        }
    }
    summary.kept = keep.len();

    let mut writer = WriterBuilder::new().delimiter(delimiter).from_writer(output);
    writer.write_record(keep.iter().filter_map(|&idx| headers.get(idx)))?;
    for record in &records {
        writer.write_record(keep.iter().filter_map(|&idx| record.get(idx)))?;
        summary.rows += 1;
    }
    writer.flush()?;

    info!(
        removed = summary.removed.len(),
        kept = summary.kept,
        rows = summary.rows,
        "redacted export"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_string()).collect()
    }

    #[test]
    fn matches_on_id_substring() {
        let patterns = patterns(&["G03Q07"]);
        assert!(should_redact("G03Q07---E-mail?", &patterns, "---"));
        assert!(should_redact("G03Q07[SQ001]---E-mail? [Work]", &patterns, "---"));
        assert!(!should_redact("G03Q08---Name?", &patterns, "---"));
    }

    #[test]
    fn title_text_does_not_match() {
        let patterns = patterns(&["mail"]);
        assert!(!should_redact("G03Q07---E-mail?", &patterns, "---"));
        assert!(!should_redact("E-mail address", &patterns, "---"));
    }

    #[test]
    fn empty_input_writes_nothing() {
        let mut output = Vec::new();
        let summary = redact(
            "".as_bytes(),
            &mut output,
            &patterns(&["G01"]),
            &ParserOptions::default(),
        )
        .unwrap();
        assert_eq!(summary, RedactSummary::default());
        assert!(output.is_empty());
    }

    #[test]
    fn unterminated_quote_writes_nothing() {
        let mut output = Vec::new();
        let result = redact(
            "id;G01Q01---A\n1;ok\n2;\"open".as_bytes(),
            &mut output,
            &patterns(&["G01"]),
            &ParserOptions::default(),
        );
        assert!(matches!(
            result,
            Err(RedactError::Ingest(IngestError::Csv { .. }))
        ));
        assert!(output.is_empty());
    }
}
