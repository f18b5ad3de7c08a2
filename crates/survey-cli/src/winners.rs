//! Raffle winner selection from survey responses.
//!
//! Respondents opt in through one question and leave a contact id through
//! another. Winners are drawn uniformly without replacement from the ids of
//! respondents who answered the opt-in question with exactly `Yes`.

use std::fmt;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use survey_model::{QuestionColumnHeader, Table};
use thiserror::Error;
use tracing::{debug, info};

use crate::logging::redact_value;

/// Answer that marks a respondent as eligible.
pub const OPT_IN_ANSWER: &str = "Yes";

/// Which of the two configured questions a column was looked up for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionRole {
    OptIn,
    Id,
}

impl fmt::Display for QuestionRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OptIn => f.write_str("opt-in"),
            Self::Id => f.write_str("id"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WinnerError {
    #[error("no column found for {role} question {question_id}")]
    MissingQuestion { role: QuestionRole, question_id: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinnerOptions {
    /// How many winners to draw.
    pub num_winners: usize,
    /// `question_id` of the opt-in question.
    pub optin_question: u32,
    /// `question_id` of the question holding the contact id.
    pub id_question: u32,
    /// Seed for a reproducible draw; drawn from OS entropy when unset.
    pub seed: Option<u64>,
}

impl Default for WinnerOptions {
    fn default() -> Self {
        Self {
            num_winners: 1,
            optin_question: 0,
            id_question: 1,
            seed: None,
        }
    }
}

fn question_column(
    table: &Table<QuestionColumnHeader>,
    question_id: u32,
    role: QuestionRole,
) -> Result<usize, WinnerError> {
    table
        .find_question_column(question_id)
        .ok_or(WinnerError::MissingQuestion { role, question_id })
}

/// Ids of every respondent who opted in, in row order.
///
/// Only the first column of each question is consulted. Rows with an empty
/// id are skipped.
pub fn eligible_candidates(
    table: &Table<QuestionColumnHeader>,
    options: &WinnerOptions,
) -> Result<Vec<String>, WinnerError> {
    let optin_idx = question_column(table, options.optin_question, QuestionRole::OptIn)?;
    let id_idx = question_column(table, options.id_question, QuestionRole::Id)?;

    let candidates: Vec<String> = table
        .rows
        .iter()
        .filter(|row| {
            row.cells
                .get(optin_idx)
                .and_then(|cell| cell.as_text())
                .is_some_and(|answer| answer == OPT_IN_ANSWER)
        })
        .filter_map(|row| row.cells.get(id_idx).and_then(|cell| cell.as_text()))
        .map(str::to_string)
        .collect();

    debug!(
        responses = table.height(),
        eligible = candidates.len(),
        "collected raffle candidates"
    );
    Ok(candidates)
}

/// Draws the winners and returns them sorted.
///
/// When there are no more candidates than requested winners, every candidate
/// wins.
pub fn select_winners(
    table: &Table<QuestionColumnHeader>,
    options: &WinnerOptions,
) -> Result<Vec<String>, WinnerError> {
    let mut candidates = eligible_candidates(table, options)?;
    if candidates.len() <= options.num_winners {
        candidates.sort();
        info!(winners = candidates.len(), "candidate pool not larger than draw, all win");
        return Ok(candidates);
    }

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut winners: Vec<String> = candidates
        .choose_multiple(&mut rng, options.num_winners)
        .cloned()
        .collect();
    winners.sort();

    for winner in &winners {
        tracing::trace!(winner = redact_value(winner), "drew winner");
    }
    info!(
        candidates = candidates.len(),
        winners = winners.len(),
        seeded = options.seed.is_some(),
        "drew raffle winners"
    );
    Ok(winners)
}
