//! Survey export ingestion.
//!
//! Reads delimited survey exports whose header cells combine a machine id and
//! a title (`G01Q02[SQ003]---Question? [Answer]`), separates administrative
//! metadata columns from question columns, and decodes question headers into
//! group, question and answer parts.

pub mod classify;
pub mod error;
pub mod header;
pub mod metadata;
pub mod options;
pub mod parser;
pub mod question_id;
pub mod questions;
pub mod reader;
pub mod title;

pub use classify::{ColumnClassification, classify_columns};
pub use error::{IngestError, Result};
pub use header::split_header;
pub use metadata::{TIMESTAMP_FORMAT, is_date_column, parse_timestamp, project_metadata};
pub use options::{DEFAULT_COLUMN_DELIMITER, DEFAULT_HEADER_SEPARATOR, ParserOptions};
pub use parser::SurveyParser;
pub use question_id::{is_question_id, match_question_id};
pub use questions::{project_questions, question_header};
pub use reader::{check_closed_quotes, read_export_text, read_survey_file, read_survey_table};
pub use title::split_answer_title;
