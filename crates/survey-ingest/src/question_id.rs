//! Question id grammar.
//!
//! Question columns carry ids in one of three shapes, tried in order:
//!
//! 1. `G<group>Q<question>`
//! 2. `G<group>Q<question>[SQ<answer>]`
//! 3. `G<group>Q<question>[<answer>]`
//!
//! Older exports only produce the first shape; sub-answer brackets came later.
//! Each shape has its own matcher and the first one that consumes the whole id
//! wins. Numbers may carry leading zeros (`G01Q02`).

use survey_model::QuestionId;

type Matcher = fn(&str) -> Option<QuestionId>;

/// Ranked matchers, first success wins.
const MATCHERS: [Matcher; 3] = [match_plain, match_sub_answer, match_other_answer];

/// Decodes a machine id, returning `None` when it is not a question id.
pub fn match_question_id(id: &str) -> Option<QuestionId> {
    MATCHERS.iter().find_map(|matcher| matcher(id))
}

/// True when `id` follows one of the question id shapes.
pub fn is_question_id(id: &str) -> bool {
    match_question_id(id).is_some()
}

fn match_plain(id: &str) -> Option<QuestionId> {
    let (group, question, rest) = split_group_question(id)?;
    rest.is_empty().then_some(QuestionId::Plain { group, question })
}

fn match_sub_answer(id: &str) -> Option<QuestionId> {
    let (group, question, rest) = split_group_question(id)?;
    let inner = bracketed(rest)?.strip_prefix("SQ")?;
    let (answer, tail) = take_number(inner)?;
    tail.is_empty().then_some(QuestionId::SubAnswer {
        group,
        question,
        answer,
    })
}

fn match_other_answer(id: &str) -> Option<QuestionId> {
    let (group, question, rest) = split_group_question(id)?;
    let answer = bracketed(rest)?;
    Some(QuestionId::OtherAnswer {
        group,
        question,
        answer: answer.to_string(),
    })
}

/// Consumes the `G<n>Q<n>` head shared by every shape.
fn split_group_question(id: &str) -> Option<(u32, u32, &str)> {
    let rest = id.strip_prefix('G')?;
    let (group, rest) = take_number(rest)?;
    let rest = rest.strip_prefix('Q')?;
    let (question, rest) = take_number(rest)?;
    Some((group, question, rest))
}

/// Consumes a run of ASCII digits. Fails on an empty run or `u32` overflow.
fn take_number(input: &str) -> Option<(u32, &str)> {
    let end = input
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(input.len());
    if end == 0 {
        return None;
    }
    let (digits, rest) = input.split_at(end);
    digits.parse().ok().map(|value| (value, rest))
}

/// Contents of a `[...]` suffix spanning the whole input; must be non-empty.
fn bracketed(input: &str) -> Option<&str> {
    input
        .strip_prefix('[')?
        .strip_suffix(']')
        .filter(|inner| !inner.is_empty())
}
