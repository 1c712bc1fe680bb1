use std::path::PathBuf;

/// Coarse classification of [`Error`], used for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    Io,
    Parse,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    InvalidArgument(String),
    #[error("error creating output folder {}", path.display())]
    CreateFolder {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("error opening workbook {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },
    #[error("error reading sheet {sheet}")]
    ReadSheet {
        sheet: String,
        #[source]
        source: calamine::Error,
    },
    #[error("sheet name {0:?} does not form a file name inside the output folder")]
    InvalidSheetName(String),
    #[error("error creating output file {}", path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("error writing CSV to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Error::Open {
                source: calamine::Error::Io(_),
                ..
            } => ErrorKind::Io,
            Error::Open { .. } | Error::ReadSheet { .. } => ErrorKind::Parse,
            Error::CreateFolder { .. }
            | Error::InvalidSheetName(_)
            | Error::CreateFile { .. }
            | Error::Write { .. } => ErrorKind::Io,
        }
    }
}
