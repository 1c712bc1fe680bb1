use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{Data, DataType, Range, Reader, Sheets, open_workbook_auto};
use chrono::Timelike;
use tracing::debug;

use crate::table::Row;
use crate::{Result, error::Error};

/// Where the converter gets its sheets from.
pub trait SheetSource {
    /// Sheet names in the order the underlying reader reports them.
    fn sheet_names(&self) -> Vec<String>;

    /// All rows of `sheet` as cell text. Each row starts at the first column
    /// and carries no trailing empty cells.
    fn read_rows(&mut self, sheet: &str) -> Result<Vec<Row>>;
}

/// An open spreadsheet file (xlsx, xlsm, xlsb, xls or ods).
pub struct Workbook {
    sheets: Sheets<BufReader<File>>,
}

impl Workbook {
    pub fn open(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "opening workbook");
        let sheets = open_workbook_auto(path).map_err(|source| Error::Open {
            path: path.to_owned(),
            source,
        })?;
        Ok(Self { sheets })
    }
}

impl SheetSource for Workbook {
    fn sheet_names(&self) -> Vec<String> {
        self.sheets.sheet_names()
    }

    fn read_rows(&mut self, sheet: &str) -> Result<Vec<Row>> {
        let range = self
            .sheets
            .worksheet_range(sheet)
            .map_err(|source| Error::ReadSheet {
                sheet: sheet.to_string(),
                source,
            })?;
        Ok(anchored_rows(&range))
    }
}

/// Lays the used range out on a grid that starts at A1, then drops trailing
/// empty cells and rows.
fn anchored_rows(range: &Range<Data>) -> Vec<Row> {
    let Some((first_row, first_col)) = range.start() else {
        return Vec::new();
    };
    let mut rows: Vec<Row> = (0..first_row).map(|_| Row::new()).collect();
    for cells in range.rows() {
        let mut row: Row = std::iter::repeat_n(String::new(), first_col as usize)
            .chain(cells.iter().map(render_cell))
            .collect();
        row.truncate(row.iter().rposition(|c| !c.is_empty()).map_or(0, |i| i + 1));
        rows.push(row);
    }
    rows.truncate(rows.iter().rposition(|r| !r.is_empty()).map_or(0, |i| i + 1));
    rows
}

fn render_cell(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => f.to_string(),
        Data::Bool(true) => "TRUE".to_string(),
        Data::Bool(false) => "FALSE".to_string(),
        Data::Error(e) => e.to_string(),
        Data::DateTime(_) => match cell.as_datetime() {
            Some(dt) if dt.num_seconds_from_midnight() == 0 => dt.format("%Y-%m-%d").to_string(),
            Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => cell.to_string(),
        },
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::CellErrorType;

    fn text(s: &str) -> Data {
        Data::String(s.to_string())
    }

    #[test]
    fn renders_cells() {
        assert_eq!(render_cell(&Data::Empty), "");
        assert_eq!(render_cell(&text("hello")), "hello");
        assert_eq!(render_cell(&Data::Int(-7)), "-7");
        assert_eq!(render_cell(&Data::Float(1.0)), "1");
        assert_eq!(render_cell(&Data::Float(2.5)), "2.5");
        assert_eq!(render_cell(&Data::Bool(true)), "TRUE");
        assert_eq!(render_cell(&Data::Bool(false)), "FALSE");
        assert_eq!(render_cell(&Data::Error(CellErrorType::Div0)), "#DIV/0!");
        assert_eq!(
            render_cell(&Data::DateTimeIso("2024-03-01T10:00:00".to_string())),
            "2024-03-01T10:00:00"
        );
    }

    #[test]
    fn anchors_at_first_cell() {
        // used range B2:C3
        let mut range = Range::new((1, 1), (2, 2));
        range.set_value((1, 1), text("x"));
        range.set_value((2, 2), text("y"));

        assert_eq!(
            anchored_rows(&range),
            vec![
                Vec::<String>::new(),
                vec!["".to_string(), "x".to_string()],
                vec!["".to_string(), "".to_string(), "y".to_string()],
            ]
        );
    }

    #[test]
    fn trims_trailing_blanks() {
        let mut range = Range::new((0, 0), (2, 2));
        range.set_value((0, 0), text("a"));
        range.set_value((0, 2), Data::Empty);
        range.set_value((1, 1), text("b"));

        assert_eq!(
            anchored_rows(&range),
            vec![
                vec!["a".to_string()],
                vec!["".to_string(), "b".to_string()],
            ]
        );
    }

    #[test]
    fn empty_range() {
        assert!(anchored_rows(&Range::<Data>::empty()).is_empty());
    }

    #[test]
    fn open_missing_file() {
        let err = match Workbook::open(Path::new("does/not/exist.xlsx")) {
            Ok(_) => panic!("opened a missing workbook"),
            Err(err) => err,
        };
        assert!(matches!(err, Error::Open { .. }));
    }
}
