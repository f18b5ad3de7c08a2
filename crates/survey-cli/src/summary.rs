//! Console rendering of projected survey tables.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use survey_ingest::ColumnClassification;
use survey_model::{CellValue, ColumnHeader, QuestionColumnHeader, Table as SurveyTable};

/// Metadata columns with one row per response.
pub fn metadata_table(table: &SurveyTable<ColumnHeader>) -> Table {
    let mut rendered = Table::new();
    let mut header = vec![header_cell(&table.index_name)];
    header.extend(table.columns.iter().map(|column| {
        header_cell(&match column.id() {
            Some(id) => format!("{id}\n{}", column.title),
            None => column.title.clone(),
        })
    }));
    rendered.set_header(header);
    apply_table_style(&mut rendered);
    for row in &table.rows {
        let mut cells = vec![Cell::new(&row.key).add_attribute(Attribute::Bold)];
        cells.extend(row.cells.iter().map(value_cell));
        rendered.add_row(cells);
    }
    rendered
}

/// One row per question column with its decoded header.
pub fn questions_table(table: &SurveyTable<QuestionColumnHeader>) -> Table {
    let mut rendered = Table::new();
    rendered.set_header(vec![
        header_cell("ID"),
        header_cell("Group"),
        header_cell("Question"),
        header_cell("Answer"),
        header_cell("Text"),
        header_cell("Label"),
        header_cell("Answered"),
    ]);
    apply_summary_table_style(&mut rendered);
    align_column(&mut rendered, 1, CellAlignment::Right);
    align_column(&mut rendered, 2, CellAlignment::Right);
    align_column(&mut rendered, 6, CellAlignment::Right);
    for (idx, column) in table.columns.iter().enumerate() {
        let answered = table.column_values(idx).filter(|cell| !cell.is_missing()).count();
        rendered.add_row(vec![
            Cell::new(&column.id).fg(Color::Blue).add_attribute(Attribute::Bold),
            Cell::new(column.group_id),
            Cell::new(column.question_id),
            optional_cell(column.answer_id.as_ref().map(ToString::to_string)),
            Cell::new(&column.text),
            optional_cell(column.answer_label.clone()),
            Cell::new(answered),
        ]);
    }
    rendered
}

/// Every column of the export with the family it was assigned to.
pub fn columns_table(headers: &[ColumnHeader], classification: &ColumnClassification) -> Table {
    let mut rendered = Table::new();
    rendered.set_header(vec![
        header_cell("#"),
        header_cell("ID"),
        header_cell("Title"),
        header_cell("Kind"),
    ]);
    apply_table_style(&mut rendered);
    align_column(&mut rendered, 0, CellAlignment::Right);
    for (idx, header) in headers.iter().enumerate() {
        rendered.add_row(vec![
            Cell::new(idx + 1),
            optional_cell(header.id.clone()),
            Cell::new(&header.title),
            kind_cell(idx, classification),
        ]);
    }
    rendered
}

fn kind_cell(idx: usize, classification: &ColumnClassification) -> Cell {
    if classification.questions.contains(&idx) {
        Cell::new("question").fg(Color::Green)
    } else if classification.metadata.contains(&idx) {
        Cell::new("metadata").fg(Color::Cyan)
    } else {
        dim_cell("other")
    }
}

fn value_cell(value: &CellValue) -> Cell {
    match value {
        CellValue::Missing => dim_cell("-"),
        CellValue::Timestamp(_) => Cell::new(value.to_display_string()).fg(Color::Yellow),
        CellValue::Text(text) => Cell::new(text),
    }
}

fn optional_cell(value: Option<String>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(165);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use survey_ingest::classify_columns;

    #[test]
    fn columns_table_has_one_row_per_header() {
        let headers = vec![
            ColumnHeader::new("submitdate", "Date submitted"),
            ColumnHeader::new("G01Q01", "Question?"),
            ColumnHeader::new("interviewtime", "Total time"),
        ];
        let classification = classify_columns(&headers);
        let rendered = columns_table(&headers, &classification);
        assert_eq!(rendered.row_iter().count(), 3);
        let text = rendered.to_string();
        assert!(text.contains("metadata"));
        assert!(text.contains("question"));
        assert!(text.contains("other"));
    }
}
