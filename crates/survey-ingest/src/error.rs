//! Error types for survey export ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or projecting a survey export.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Export file not found.
    #[error("survey export not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Delimited Text Errors ===
    /// Malformed delimited text (unterminated quote, ragged row, bad UTF-8).
    #[error("failed to parse delimited text: {message}")]
    Csv { message: String },

    /// Column delimiter is not a single ASCII character.
    #[error("column delimiter must be a single ASCII character, got '{delimiter}'")]
    InvalidDelimiter { delimiter: String },

    // === Projection Errors ===
    /// A cell in a date column does not match `YYYY-MM-DD HH:MM:SS`.
    #[error("invalid timestamp '{value}' in column '{column}' (row {row})")]
    TimestampParse {
        column: String,
        row: String,
        value: String,
    },

    /// A column handed to the question projection has no question id.
    #[error("column '{column}' is not a question column")]
    NotAQuestion { column: String },
}

impl From<csv::Error> for IngestError {
    fn from(err: csv::Error) -> Self {
        Self::Csv {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
