#![deny(unsafe_code)]

use std::fmt;

/// Answer part of a question id.
///
/// `[SQ003]` decodes to `Index(3)`; any other bracketed suffix such as
/// `[other]` is kept verbatim as a `Label`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum AnswerId {
    Index(u32),
    Label(String),
}

impl fmt::Display for AnswerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Label(label) => f.write_str(label),
        }
    }
}

/// A decoded question identifier such as `G01Q02`, `G01Q02[SQ003]` or
/// `G01Q02[other]`.
///
/// Each variant corresponds to one shape of the identifier grammar. A column
/// whose id matches none of them has no `QuestionId` at all.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuestionId {
    /// `G<group>Q<question>`
    Plain { group: u32, question: u32 },
    /// `G<group>Q<question>[SQ<answer>]`
    SubAnswer {
        group: u32,
        question: u32,
        answer: u32,
    },
    /// `G<group>Q<question>[<answer>]`
    OtherAnswer {
        group: u32,
        question: u32,
        answer: String,
    },
}

impl QuestionId {
    pub fn group(&self) -> u32 {
        match self {
            Self::Plain { group, .. }
            | Self::SubAnswer { group, .. }
            | Self::OtherAnswer { group, .. } => *group,
        }
    }

    pub fn question(&self) -> u32 {
        match self {
            Self::Plain { question, .. }
            | Self::SubAnswer { question, .. }
            | Self::OtherAnswer { question, .. } => *question,
        }
    }

    /// Returns the answer part, `None` for the plain shape.
    pub fn answer(&self) -> Option<AnswerId> {
        match self {
            Self::Plain { .. } => None,
            Self::SubAnswer { answer, .. } => Some(AnswerId::Index(*answer)),
            Self::OtherAnswer { answer, .. } => Some(AnswerId::Label(answer.clone())),
        }
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain { group, question } => write!(f, "G{group:02}Q{question:02}"),
            Self::SubAnswer {
                group,
                question,
                answer,
            } => write!(f, "G{group:02}Q{question:02}[SQ{answer:03}]"),
            Self::OtherAnswer {
                group,
                question,
                answer,
            } => write!(f, "G{group:02}Q{question:02}[{answer}]"),
        }
    }
}
