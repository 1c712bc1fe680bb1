//! Splits a spreadsheet workbook into one CSV file per sheet.
//!
//! Sheets are read with `calamine`, padded so every row has the width of the
//! widest row, and written with the `csv` crate using a configurable
//! single-byte delimiter.

mod config;
mod converter;
mod error;
mod table;
mod workbook;

pub use crate::config::Config;
pub use crate::converter::{convert_sheet, convert_sheets, convert_workbook, write_table};
pub use crate::error::{Error, ErrorKind};
pub use crate::table::{RectangularTable, Row};
pub use crate::workbook::{SheetSource, Workbook};

pub type Result<T> = std::result::Result<T, Error>;
