use clap::Parser;
use std::path::PathBuf;

/// Reads a spreadsheet workbook and writes every sheet to a CSV file in the
/// output folder.
#[derive(Parser, Debug)]
#[command(name = "sheet2csv", version, about, long_about = None)]
pub struct Cli {
    /// Workbook to read (.xlsx, .xlsm, .xlsb, .xls or .ods)
    pub workbook: PathBuf,

    /// Path to the output folder where the CSVs will be saved
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Delimiter to use between fields in the CSV
    #[arg(short, long, default_value = ",", allow_hyphen_values = true)]
    pub delimiter: String,

    /// Log each converted sheet (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}
