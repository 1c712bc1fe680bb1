use std::fs::{self, File};
use std::io::Write;
use std::path::{Component, Path, PathBuf};

use csv::{Terminator, WriterBuilder};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::table::RectangularTable;
use crate::workbook::{SheetSource, Workbook};
use crate::{Result, error::Error};

/// Writes every sheet of the workbook at `path` to `<sheet>.csv` in the
/// configured output folder, returning the files in the order written.
///
/// Stops at the first sheet that fails. Files already written stay on disk.
pub fn convert_workbook(path: &Path, config: &Config) -> Result<Vec<PathBuf>> {
    debug!(folder = %config.output_folder.display(), "creating output folder");
    fs::create_dir_all(&config.output_folder).map_err(|source| Error::CreateFolder {
        path: config.output_folder.clone(),
        source,
    })?;

    let mut workbook = Workbook::open(path)?;
    convert_sheets(&mut workbook, config)
}

/// Converts each sheet of `workbook` in its reported order.
pub fn convert_sheets<S: SheetSource>(workbook: &mut S, config: &Config) -> Result<Vec<PathBuf>> {
    workbook
        .sheet_names()
        .iter()
        .map(|sheet| convert_sheet(workbook, sheet, config))
        .collect()
}

pub fn convert_sheet<S: SheetSource>(
    workbook: &mut S,
    sheet: &str,
    config: &Config,
) -> Result<PathBuf> {
    let path = output_path(&config.output_folder, sheet)?;
    let table = RectangularTable::from_rows(workbook.read_rows(sheet)?);
    if table.is_empty() {
        warn!(sheet, "sheet has no rows");
    }

    let file = File::create(&path).map_err(|source| Error::CreateFile {
        path: path.clone(),
        source,
    })?;
    write_table(file, &table, config.delimiter).map_err(|source| Error::Write {
        path: path.clone(),
        source,
    })?;

    info!(
        sheet,
        rows = table.rows().len(),
        columns = table.max_columns(),
        path = %path.display(),
        "converted sheet"
    );
    Ok(path)
}

/// Writes `table` as delimited text, quoting fields that contain the
/// delimiter, a double quote or a line break.
///
/// A record made of a single empty field comes out as `""` rather than a
/// blank line, so one-column sheets keep their empty rows when read back.
pub fn write_table<W: Write>(
    writer: W,
    table: &RectangularTable,
    delimiter: u8,
) -> csv::Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);
    for row in table.rows() {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// `<folder>/<sheet>.csv`, rejecting names that would land outside `folder`.
fn output_path(folder: &Path, sheet: &str) -> Result<PathBuf> {
    let file_name = format!("{sheet}.csv");
    let mut components = Path::new(&file_name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(folder.join(file_name)),
        _ => Err(Error::InvalidSheetName(sheet.to_string())),
    }
}
