/// One row of cell text, as read from a sheet.
pub type Row = Vec<String>;

/// A sheet's rows padded to a common width.
///
/// Every row holds exactly [`max_columns`](Self::max_columns) cells: short
/// rows get trailing empty strings, nothing is truncated or reordered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RectangularTable {
    rows: Vec<Row>,
    max_columns: usize,
}

impl RectangularTable {
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let max_columns = rows.iter().map(Vec::len).max().unwrap_or(0);
        let rows = rows
            .into_iter()
            .map(|row| {
                let missing = max_columns - row.len();
                row.into_iter()
                    .chain(std::iter::repeat_n(String::new(), missing))
                    .collect()
            })
            .collect();
        Self { rows, max_columns }
    }

    pub fn max_columns(&self) -> usize {
        self.max_columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
