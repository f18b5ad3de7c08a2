//! Parser facade tying reading, classification and projection together.

use std::path::Path;

use survey_model::{ColumnHeader, QuestionColumnHeader, QuestionId, Table};
use tracing::info_span;

use crate::classify::{ColumnClassification, classify_columns};
use crate::error::Result;
use crate::metadata::project_metadata;
use crate::options::ParserOptions;
use crate::question_id::{is_question_id, match_question_id};
use crate::questions::project_questions;
use crate::reader::{read_export_text, read_survey_table};

/// Parses survey exports whose headers were written as "question code &
/// question text" with a code/text separator.
///
/// The parser holds only its options and can be shared freely between
/// threads. Every method is a pure function of its input text.
#[derive(Debug, Clone, Default)]
pub struct SurveyParser {
    options: ParserOptions,
}

impl SurveyParser {
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Full table with every column's header split into id and title.
    pub fn parse(&self, content: &str) -> Result<Table<ColumnHeader>> {
        let _span = info_span!("parse", bytes = content.len()).entered();
        read_survey_table(content, &self.options)
    }

    /// Only the administrative columns preceding the first question, with
    /// date columns converted to timestamps.
    pub fn parse_metadata(&self, content: &str) -> Result<Table<ColumnHeader>> {
        let table = self.parse(content)?;
        let _span = info_span!("parse_metadata").entered();
        let classification = self.classify(&table);
        project_metadata(&table, &classification.metadata)
    }

    /// Only question columns, each header decomposed into group, question,
    /// answer, text and answer label.
    pub fn parse_questions(&self, content: &str) -> Result<Table<QuestionColumnHeader>> {
        let table = self.parse(content)?;
        let _span = info_span!("parse_questions").entered();
        let classification = self.classify(&table);
        project_questions(&table, &classification.questions)
    }

    /// Reads `path` and runs [`SurveyParser::parse_metadata`] on it.
    pub fn parse_metadata_file(&self, path: &Path) -> Result<Table<ColumnHeader>> {
        self.parse_metadata(&read_export_text(path)?)
    }

    /// Reads `path` and runs [`SurveyParser::parse_questions`] on it.
    pub fn parse_questions_file(&self, path: &Path) -> Result<Table<QuestionColumnHeader>> {
        self.parse_questions(&read_export_text(path)?)
    }

    pub fn classify(&self, table: &Table<ColumnHeader>) -> ColumnClassification {
        classify_columns(&table.columns)
    }

    pub fn parse_question_id(&self, id: &str) -> Option<QuestionId> {
        match_question_id(id)
    }

    pub fn is_question_id(&self, id: &str) -> bool {
        is_question_id(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parser_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SurveyParser>();
    }

    #[test]
    fn uses_configured_separator() {
        let parser = SurveyParser::new(ParserOptions::new().with_header_separator("%%%"));
        let table = parser
            .parse_questions("id%%%Response ID;G01Q01%%%Agree?\n1;Yes")
            .unwrap();
        assert_eq!(table.width(), 1);
        assert_eq!(table.columns[0].text, "Agree?");
    }
}
