//! Question projection: question columns with decomposed headers.

use survey_model::{ColumnHeader, QuestionColumnHeader, Table};

use crate::error::{IngestError, Result};
use crate::question_id::match_question_id;
use crate::title::split_answer_title;

/// Upgrades one header to a [`QuestionColumnHeader`].
pub fn question_header(header: &ColumnHeader) -> Result<QuestionColumnHeader> {
    let id = header.id().unwrap_or_default();
    let Some(question) = match_question_id(id) else {
        return Err(IngestError::NotAQuestion {
            column: header.id.clone().unwrap_or_else(|| header.title.clone()),
        });
    };
    let (text, answer_label) = split_answer_title(&header.title);
    Ok(QuestionColumnHeader::from_parts(
        id,
        &question,
        text,
        answer_label,
    ))
}

/// Restricts `table` to `questions` columns, keeping their source order, and
/// decomposes each header into group, question, answer, text and label.
pub fn project_questions(
    table: &Table<ColumnHeader>,
    questions: &[usize],
) -> Result<Table<QuestionColumnHeader>> {
    let projected = table
        .select_columns(questions)
        .try_map_columns(|header| question_header(&header))?;
    tracing::debug!(columns = projected.width(), "projected questions");
    Ok(projected)
}
