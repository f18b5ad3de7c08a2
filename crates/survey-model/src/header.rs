#![deny(unsafe_code)]

use crate::question::{AnswerId, QuestionId};

/// Decoded form of a compound column header (`<id><separator><title>`).
///
/// `id` is `None` when the raw header carried no separator; `title` then holds
/// the raw header unchanged.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ColumnHeader {
    pub id: Option<String>,
    pub title: String,
}

impl ColumnHeader {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            title: title.into(),
        }
    }

    /// Header without a machine id.
    pub fn without_id(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Header of a question column with the id and title fully decomposed.
///
/// Built once by the question projection; consumers select columns through
/// `group_id` / `question_id` instead of re-parsing `id`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QuestionColumnHeader {
    /// Raw machine id, e.g. `G01Q02[SQ003]`.
    pub id: String,
    pub group_id: u32,
    pub question_id: u32,
    pub answer_id: Option<AnswerId>,
    /// Question text with any trailing `[label]` removed.
    pub text: String,
    /// Label of the answer option, taken from a trailing `[label]` in the title.
    pub answer_label: Option<String>,
}

impl QuestionColumnHeader {
    pub fn from_parts(
        id: impl Into<String>,
        question: &QuestionId,
        text: impl Into<String>,
        answer_label: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            group_id: question.group(),
            question_id: question.question(),
            answer_id: question.answer(),
            text: text.into(),
            answer_label,
        }
    }

    /// Rebuilds the structured id from the stored fields.
    pub fn question(&self) -> QuestionId {
        match &self.answer_id {
            None => QuestionId::Plain {
                group: self.group_id,
                question: self.question_id,
            },
            Some(AnswerId::Index(answer)) => QuestionId::SubAnswer {
                group: self.group_id,
                question: self.question_id,
                answer: *answer,
            },
            Some(AnswerId::Label(answer)) => QuestionId::OtherAnswer {
                group: self.group_id,
                question: self.question_id,
                answer: answer.clone(),
            },
        }
    }
}
