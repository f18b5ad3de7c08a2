//! Parser configuration.

use crate::error::{IngestError, Result};

/// Default separator between columns.
pub const DEFAULT_COLUMN_DELIMITER: char = ';';

/// Default separator between machine id and title inside a header cell
/// (the "code/text separator" chosen at export time).
pub const DEFAULT_HEADER_SEPARATOR: &str = "---";

/// Options controlling how an export is read.
///
/// Immutable once handed to a parser; clone it to derive a variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserOptions {
    /// Column delimiter. Must be a single ASCII character.
    pub column_delimiter: char,
    /// Marker between id and title in a header cell.
    pub header_separator: String,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            column_delimiter: DEFAULT_COLUMN_DELIMITER,
            header_separator: DEFAULT_HEADER_SEPARATOR.to_string(),
        }
    }
}

impl ParserOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_column_delimiter(mut self, delimiter: char) -> Self {
        self.column_delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_header_separator(mut self, separator: impl Into<String>) -> Self {
        self.header_separator = separator.into();
        self
    }

    /// Delimiter as the single byte the CSV reader expects.
    pub fn delimiter_byte(&self) -> Result<u8> {
        if self.column_delimiter.is_ascii() {
            Ok(self.column_delimiter as u8)
        } else {
            Err(IngestError::InvalidDelimiter {
                delimiter: self.column_delimiter.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_export_defaults() {
        let options = ParserOptions::default();
        assert_eq!(options.column_delimiter, ';');
        assert_eq!(options.header_separator, "---");
        assert_eq!(options.delimiter_byte().unwrap(), b';');
    }

    #[test]
    fn rejects_non_ascii_delimiter() {
        let options = ParserOptions::new().with_column_delimiter('§');
        assert!(matches!(
            options.delimiter_byte(),
            Err(IngestError::InvalidDelimiter { .. })
        ));
    }

    #[test]
    fn builders_override_defaults() {
        let options = ParserOptions::new()
            .with_column_delimiter(',')
            .with_header_separator("%%%");
        assert_eq!(options.delimiter_byte().unwrap(), b',');
        assert_eq!(options.header_separator, "%%%");
    }
}
