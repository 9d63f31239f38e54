//! File adapters for the three artefacts the pipeline touches: the column
//! catalog, the pipe-delimited data file, and the CSV output table.

pub mod columns;
pub mod csv_write;
pub mod records;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::error;

use crate::error::{EtlError, Result};

/// Delimiter shared by the catalog and data files.
pub const FIELD_DELIMITER: char = '|';

/// Opens a source file for buffered line reading.
fn open_source(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| report(EtlError::from_io(path, source)))
}

/// Emits the diagnostic for `error` and hands it back for propagation.
fn report(error: EtlError) -> EtlError {
    match &error {
        EtlError::NotFound { path } => {
            error!(path = %path.display(), "the file was not found");
        }
        EtlError::Io { path, source } => {
            error!(path = %path.display(), %source, "an I/O error occurred");
        }
        EtlError::Format {
            path,
            line_number,
            line,
            reason,
        } => {
            error!(path = %path.display(), line_number, line = %line, %reason, "malformed line");
        }
        other => error!(error = %other, "operation failed"),
    }
    error
}
