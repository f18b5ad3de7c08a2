//! Metadata / question column classification.

use survey_model::ColumnHeader;

use crate::question_id::is_question_id;

/// Column indices of the two column families of an export.
///
/// `questions` holds every column whose id is a question id. `metadata` is
/// the run of non-question columns before the first question column; it never
/// resumes after that, so a trailing non-question column is in neither set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnClassification {
    pub metadata: Vec<usize>,
    pub questions: Vec<usize>,
}

impl ColumnClassification {
    /// Columns that belong to neither family.
    pub fn unclassified(&self, width: usize) -> Vec<usize> {
        (0..width)
            .filter(|idx| !self.metadata.contains(idx) && !self.questions.contains(idx))
            .collect()
    }
}

fn is_question_header(header: &ColumnHeader) -> bool {
    header.id().is_some_and(is_question_id)
}

/// Classifies headers in column order.
pub fn classify_columns(headers: &[ColumnHeader]) -> ColumnClassification {
    let questions: Vec<usize> = headers
        .iter()
        .enumerate()
        .filter(|(_, header)| is_question_header(header))
        .map(|(idx, _)| idx)
        .collect();

    // Stops at the first question column for good.
    let mut metadata = Vec::new();
    for (idx, header) in headers.iter().enumerate() {
        if is_question_header(header) {
            break;
        }
        metadata.push(idx);
    }

    let classification = ColumnClassification {
        metadata,
        questions,
    };
    tracing::debug!(
        columns = headers.len(),
        metadata = classification.metadata.len(),
        questions = classification.questions.len(),
        "classified columns"
    );
    classification
}
