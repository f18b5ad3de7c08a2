//! Data model for parsed survey exports.
//!
//! Column headers in an export encode a machine id and a title. The types
//! here carry the decoded forms: [`ColumnHeader`] for every column,
//! [`QuestionId`] for ids that follow the `G<n>Q<n>` grammar, and
//! [`QuestionColumnHeader`] once a question column has been fully decomposed.

pub mod header;
pub mod question;
pub mod table;

pub use header::{ColumnHeader, QuestionColumnHeader};
pub use question::{AnswerId, QuestionId};
pub use table::{CellValue, Row, Table};

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_question_table() -> Table<QuestionColumnHeader> {
        let mut table = Table::new(
            "id---Response ID",
            vec![
                QuestionColumnHeader::from_parts(
                    "G01Q02[SQ001]",
                    &QuestionId::SubAnswer {
                        group: 1,
                        question: 2,
                        answer: 1,
                    },
                    "Pick one",
                    Some("First".to_string()),
                ),
                QuestionColumnHeader::from_parts(
                    "G02Q05",
                    &QuestionId::Plain {
                        group: 2,
                        question: 5,
                    },
                    "Free text",
                    None,
                ),
                QuestionColumnHeader::from_parts(
                    "G01Q02[other]",
                    &QuestionId::OtherAnswer {
                        group: 1,
                        question: 2,
                        answer: "other".to_string(),
                    },
                    "Pick one",
                    Some("Other".to_string()),
                ),
            ],
        );
        table.push_row(Row {
            key: "1".to_string(),
            cells: vec![
                CellValue::from_raw("Yes"),
                CellValue::from_raw("hello"),
                CellValue::from_raw(""),
            ],
        });
        table
    }

    #[test]
    fn question_columns_are_found_by_number() {
        let table = sample_question_table();
        assert_eq!(table.question_columns(2), vec![0, 2]);
        assert_eq!(table.find_question_column(5), Some(1));
        assert_eq!(table.find_question_column(7), None);
        assert_eq!(table.group_columns(1), vec![0, 2]);
    }

    #[test]
    fn select_columns_builds_new_table() {
        let table = sample_question_table();
        let selected = table.select_columns(&[2, 0, 9]);
        assert_eq!(selected.width(), 2);
        assert_eq!(selected.columns[0].id, "G01Q02[other]");
        assert_eq!(selected.rows[0].cells, vec![CellValue::Missing, CellValue::from_raw("Yes")]);
        assert_eq!(table.width(), 3);
    }

    #[test]
    fn select_group_keeps_group_columns_and_rows() {
        let table = sample_question_table();
        let group = table.select_group(1);
        assert_eq!(group.width(), 2);
        assert_eq!(group.columns[0].id, table.columns[0].id);
        assert_eq!(group.columns[1].id, "G01Q02[other]");
        assert_eq!(group.rows[0].key, "1");
        assert_eq!(
            group.rows[0].cells,
            vec![CellValue::from_raw("Yes"), CellValue::Missing]
        );

        let empty = table.select_group(9);
        assert_eq!(empty.width(), 0);
        assert_eq!(empty.height(), 1);
    }

    #[test]
    fn header_rebuilds_question_id() {
        let table = sample_question_table();
        assert_eq!(table.columns[1].question().to_string(), "G02Q05");
        assert_eq!(
            table.columns[0].question(),
            QuestionId::SubAnswer {
                group: 1,
                question: 2,
                answer: 1
            }
        );
    }
}
