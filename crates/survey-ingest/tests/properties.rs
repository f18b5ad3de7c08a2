//! Property tests for header decoding and classification.

use proptest::prelude::*;
use survey_ingest::{classify_columns, is_question_id, match_question_id, split_answer_title, split_header};
use survey_model::{ColumnHeader, QuestionId};

proptest! {
    #[test]
    fn header_without_separator_has_no_id(raw in "[a-zA-Z0-9 ?_\\[\\]-]{0,40}") {
        prop_assume!(!raw.contains("---"));
        let header = split_header(&raw, "---");
        prop_assert_eq!(header.id, None);
        prop_assert_eq!(header.title, raw);
    }

    #[test]
    fn header_with_separator_splits_at_first(id in "[a-zA-Z0-9_\\[\\]]{0,20}", title in "[a-zA-Z0-9 ?-]{0,40}") {
        let header = split_header(&format!("{id}---{title}"), "---");
        prop_assert_eq!(header.id, Some(id));
        prop_assert_eq!(header.title, title);
    }

    #[test]
    fn plain_ids_decode(group in 0u32..1000, question in 0u32..1000) {
        let id = format!("G{group:02}Q{question:02}");
        prop_assert_eq!(match_question_id(&id), Some(QuestionId::Plain { group, question }));
    }

    #[test]
    fn sub_answer_ids_decode(group in 0u32..1000, question in 0u32..1000, answer in 0u32..10000) {
        let id = format!("G{group:02}Q{question:02}[SQ{answer:03}]");
        prop_assert_eq!(
            match_question_id(&id),
            Some(QuestionId::SubAnswer { group, question, answer })
        );
    }

    #[test]
    fn other_answer_ids_keep_label(group in 0u32..100, question in 0u32..100, label in "[a-z]{1,10}") {
        let id = format!("G{group}Q{question}[{label}]");
        prop_assert_eq!(
            match_question_id(&id),
            Some(QuestionId::OtherAnswer { group, question, answer: label })
        );
    }

    #[test]
    fn lowercase_words_are_not_question_ids(id in "[a-z_]{0,20}") {
        prop_assert!(!is_question_id(&id));
    }

    #[test]
    fn answer_title_round_trips(text in "[a-zA-Z0-9 ?]{1,30}", label in "[a-zA-Z0-9 ?]{1,15}") {
        let (split_text, split_label) = split_answer_title(&format!("{text} [{label}]"));
        prop_assert_eq!(split_text, text);
        prop_assert_eq!(split_label, Some(label));
    }

    #[test]
    fn title_without_bracket_is_unchanged(text in "[a-zA-Z0-9 ?]{0,30}") {
        prop_assert_eq!(split_answer_title(&text), (text.clone(), None));
    }

    #[test]
    fn metadata_is_prefix_before_first_question(kinds in proptest::collection::vec(any::<bool>(), 0..12)) {
        let headers: Vec<ColumnHeader> = kinds
            .iter()
            .enumerate()
            .map(|(idx, &is_question)| {
                if is_question {
                    ColumnHeader::new(format!("G01Q{idx:02}"), "Question?")
                } else {
                    ColumnHeader::new(format!("meta{idx}"), "Meta")
                }
            })
            .collect();
        let classification = classify_columns(&headers);
        let first_question = kinds.iter().position(|&q| q).unwrap_or(kinds.len());
        let expected_questions: Vec<usize> = kinds
            .iter()
            .enumerate()
            .filter(|(_, q)| **q)
            .map(|(idx, _)| idx)
            .collect();
        prop_assert_eq!(classification.metadata, (0..first_question).collect::<Vec<_>>());
        prop_assert_eq!(classification.questions, expected_questions);
    }
}
