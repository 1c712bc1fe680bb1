use std::path::{Path, PathBuf};

use crate::{Result, error::Error};

/// Settings for one conversion run, built once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub output_folder: PathBuf,
    pub delimiter: u8,
}

impl Config {
    /// Validates `delimiter`: it must be exactly one ASCII character, since
    /// the CSV writer separates fields with a single byte.
    pub fn new(output_folder: impl AsRef<Path>, delimiter: &str) -> Result<Self> {
        let mut chars = delimiter.chars();
        let delimiter = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii() => c as u8,
            (Some(_), None) => {
                return Err(Error::InvalidArgument(format!(
                    "delimiter {delimiter:?} must be an ASCII character"
                )));
            }
            _ => {
                return Err(Error::InvalidArgument(
                    "delimiter must be a single character".to_string(),
                ));
            }
        };
        Ok(Self {
            output_folder: output_folder.as_ref().to_owned(),
            delimiter,
        })
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_folder: PathBuf::from("."),
            delimiter: b',',
        }
    }
}
