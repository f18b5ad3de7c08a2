//! Metadata projection: administrative columns with typed timestamps.

use chrono::NaiveDateTime;
use survey_model::{CellValue, ColumnHeader, Table};

use crate::error::{IngestError, Result};

/// Fixed format of timestamps in survey exports.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A column holds timestamps when its id mentions `date` and its title
/// mentions `Date` (e.g. `submitdate` / `Date submitted`). Both checks are
/// case-sensitive.
pub fn is_date_column(header: &ColumnHeader) -> bool {
    header.id().is_some_and(|id| id.contains("date")) && header.title.contains("Date")
}

/// Parses one timestamp cell.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).ok()
}

/// Restricts `table` to `metadata` columns and converts date columns to
/// [`CellValue::Timestamp`].
///
/// Missing cells stay missing. Any other cell that does not parse fails the
/// whole projection.
pub fn project_metadata(
    table: &Table<ColumnHeader>,
    metadata: &[usize],
) -> Result<Table<ColumnHeader>> {
    let mut projected = table.select_columns(metadata);
    let date_columns: Vec<usize> = projected
        .columns
        .iter()
        .enumerate()
        .filter(|(_, header)| is_date_column(header))
        .map(|(idx, _)| idx)
        .collect();

    for &col_idx in &date_columns {
        let column_name = column_label(&projected.columns[col_idx]);
        for row in &mut projected.rows {
            let Some(cell) = row.cells.get_mut(col_idx) else {
                continue;
            };
            let CellValue::Text(raw) = &*cell else {
                continue;
            };
            let Some(timestamp) = parse_timestamp(raw) else {
                return Err(IngestError::TimestampParse {
                    column: column_name,
                    row: row.key.clone(),
                    value: raw.clone(),
                });
            };
            *cell = CellValue::Timestamp(timestamp);
        }
    }

    tracing::debug!(
        columns = projected.width(),
        date_columns = date_columns.len(),
        "projected metadata"
    );
    Ok(projected)
}

fn column_label(header: &ColumnHeader) -> String {
    header.id().unwrap_or(&header.title).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use survey_model::Row;

    fn table_with(header: ColumnHeader, values: &[&str]) -> Table<ColumnHeader> {
        let mut table = Table::new("id---Response ID", vec![header]);
        for (idx, value) in values.iter().enumerate() {
            table.push_row(Row {
                key: (idx + 1).to_string(),
                cells: vec![CellValue::from_raw(value)],
            });
        }
        table
    }

    #[test]
    fn date_column_needs_both_markers() {
        assert!(is_date_column(&ColumnHeader::new("submitdate", "Date submitted")));
        assert!(is_date_column(&ColumnHeader::new("startdate", "Date started")));
        assert!(!is_date_column(&ColumnHeader::new("submitdate", "Fate submitted")));
        assert!(!is_date_column(&ColumnHeader::new("submitfate", "Date submitted")));
        assert!(!is_date_column(&ColumnHeader::new("submitDate", "Date submitted")));
        assert!(!is_date_column(&ColumnHeader::without_id("Date submitted")));
    }

    #[test]
    fn converts_date_columns() {
        let table = table_with(
            ColumnHeader::new("submitdate", "Date submitted"),
            &["2022-01-01 00:00:00", ""],
        );
        let projected = project_metadata(&table, &[0]).unwrap();
        let expected = parse_timestamp("2022-01-01 00:00:00").unwrap();
        assert_eq!(projected.rows[0].cells[0], CellValue::Timestamp(expected));
        assert_eq!(projected.rows[1].cells[0], CellValue::Missing);
    }

    #[test]
    fn leaves_other_columns_as_text() {
        let table = table_with(
            ColumnHeader::new("submitdate", "Fate submitted"),
            &["2022-01-01 00:00:00"],
        );
        let projected = project_metadata(&table, &[0]).unwrap();
        assert_eq!(
            projected.rows[0].cells[0],
            CellValue::from_raw("2022-01-01 00:00:00")
        );
    }

    #[test]
    fn bad_timestamp_is_fatal() {
        let table = table_with(
            ColumnHeader::new("submitdate", "Date submitted"),
            &["2022-01-01 00:00:00", "01/02/2022"],
        );
        let err = project_metadata(&table, &[0]).unwrap_err();
        match err {
            IngestError::TimestampParse { column, row, value } => {
                assert_eq!(column, "submitdate");
                assert_eq!(row, "2");
                assert_eq!(value, "01/02/2022");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn date_only_value_is_rejected() {
        assert!(parse_timestamp("2022-01-01").is_none());
        assert!(parse_timestamp("2022-01-01 12:30:45").is_some());
    }
}
