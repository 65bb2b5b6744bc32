use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crispex_core::RecordError;
use crispex_ensembl::LocatorError;

/// Error that aborts a batch run.
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Can't read input directory {path}: {source}")]
    InputDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Can't read report file {path}: {source}")]
    ReadReport {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Can't write output file {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed record in {path} at line {line}: {source}")]
    MalformedRecord {
        path: PathBuf,
        line: usize,
        #[source]
        source: RecordError,
    },

    #[error("Report file name is not usable as a gene name: {0}")]
    InvalidGeneName(PathBuf),

    #[error(transparent)]
    Locator(#[from] LocatorError),
}

/// Result type alias for batch runs.
pub type Result<T> = std::result::Result<T, ProcessError>;
