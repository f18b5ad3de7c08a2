#![deny(unsafe_code)]

use chrono::NaiveDateTime;

use crate::header::QuestionColumnHeader;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Timestamp(NaiveDateTime),
    Missing,
}

impl CellValue {
    /// Builds a cell from raw reader output. Empty strings become `Missing`.
    pub fn from_raw(raw: &str) -> Self {
        if raw.is_empty() {
            Self::Missing
        } else {
            Self::Text(raw.to_string())
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            Self::Timestamp(value) => Some(*value),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Renders the cell the way it would appear in an export file.
    pub fn to_display_string(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::Timestamp(value) => value.format("%Y-%m-%d %H:%M:%S").to_string(),
            Self::Missing => String::new(),
        }
    }
}

/// One response row. `key` is the unparsed first column of the export.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Row {
    pub key: String,
    pub cells: Vec<CellValue>,
}

/// Column-ordered table with one header of type `H` per column.
///
/// Every row holds exactly `columns.len()` cells. Projections build a new
/// table from a subset of columns rather than editing one in place.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Table<H> {
    /// Raw header of the row-key column.
    pub index_name: String,
    pub columns: Vec<H>,
    pub rows: Vec<Row>,
}

impl<H> Default for Table<H> {
    fn default() -> Self {
        Self {
            index_name: String::new(),
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }
}

impl<H> Table<H> {
    pub fn new(index_name: impl Into<String>, columns: Vec<H>) -> Self {
        Self {
            index_name: index_name.into(),
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.rows.is_empty()
    }

    /// Iterates over the cells of column `idx`, top to bottom.
    pub fn column_values(&self, idx: usize) -> impl Iterator<Item = &CellValue> + '_ {
        self.rows.iter().filter_map(move |row| row.cells.get(idx))
    }

    /// Builds a new table holding only the listed columns, in the listed order.
    ///
    /// Indices past the last column are skipped.
    pub fn select_columns(&self, indices: &[usize]) -> Self
    where
        H: Clone,
    {
        let indices: Vec<usize> = indices
            .iter()
            .copied()
            .filter(|&idx| idx < self.columns.len())
            .collect();
        let columns = indices.iter().map(|&idx| self.columns[idx].clone()).collect();
        let rows = self
            .rows
            .iter()
            .map(|row| Row {
                key: row.key.clone(),
                cells: indices
                    .iter()
                    .map(|&idx| row.cells.get(idx).cloned().unwrap_or(CellValue::Missing))
                    .collect(),
            })
            .collect();
        Self {
            index_name: self.index_name.clone(),
            columns,
            rows,
        }
    }

    /// Replaces every column header, keeping the cells.
    pub fn map_columns<T, F>(self, f: F) -> Table<T>
    where
        F: FnMut(H) -> T,
    {
        Table {
            index_name: self.index_name,
            columns: self.columns.into_iter().map(f).collect(),
            rows: self.rows,
        }
    }

    /// Fallible variant of [`Table::map_columns`]; the first error aborts.
    pub fn try_map_columns<T, E, F>(self, f: F) -> Result<Table<T>, E>
    where
        F: FnMut(H) -> Result<T, E>,
    {
        let columns = self.columns.into_iter().map(f).collect::<Result<Vec<_>, E>>()?;
        Ok(Table {
            index_name: self.index_name,
            columns,
            rows: self.rows,
        })
    }
}

impl Table<QuestionColumnHeader> {
    /// Indices of every column belonging to question number `question_id`.
    pub fn question_columns(&self, question_id: u32) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, header)| header.question_id == question_id)
            .map(|(idx, _)| idx)
            .collect()
    }

    /// First column for question number `question_id`, if any.
    pub fn find_question_column(&self, question_id: u32) -> Option<usize> {
        self.columns
            .iter()
            .position(|header| header.question_id == question_id)
    }

    /// Indices of every column in question group `group_id`.
    pub fn group_columns(&self, group_id: u32) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, header)| header.group_id == group_id)
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Narrows the table to the columns of question group `group_id`.
    pub fn select_group(&self, group_id: u32) -> Self {
        self.select_columns(&self.group_columns(group_id))
    }
}
