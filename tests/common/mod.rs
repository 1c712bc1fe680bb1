use std::path::Path;

use rust_xlsxwriter::Workbook;

pub type Sheet<'a> = (&'a str, &'a [&'a [&'a str]]);

/// Saves an xlsx with one worksheet per entry. Empty strings leave the cell
/// blank.
pub fn write_workbook(path: &Path, sheets: &[Sheet]) {
    let mut workbook = Workbook::new();
    for (name, rows) in sheets {
        let sheet = workbook.add_worksheet();
        sheet.set_name(*name).unwrap();
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                if !value.is_empty() {
                    sheet.write_string(r as u32, c as u16, *value).unwrap();
                }
            }
        }
    }
    workbook.save(path).unwrap();
}
