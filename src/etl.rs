use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::config::EtlConfig;
use crate::error::{ErrorKind, EtlError, Result};
use crate::io::{columns, csv_write, records};
use crate::model::Dataset;
use crate::storage::StorageLoader;

/// Counts and location reported after a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub columns: usize,
    pub records: usize,
    pub output: PathBuf,
}

/// Reads the column catalog and then the data file into a [`Dataset`].
#[instrument(
    level = "info",
    skip_all,
    fields(columns = %config.columns_path.display(), data = %config.data_path.display())
)]
pub fn extract(config: &EtlConfig) -> Result<Dataset> {
    let catalog = columns::read_columns(&config.columns_path)?;
    info!(column_count = catalog.len(), "read column catalog");
    let records = records::read_records(&config.data_path)?;
    info!(record_count = records.len(), "read data records");
    Ok(Dataset::new(catalog, records))
}

/// Runs extract, write, and load in order. The first failure stops the run;
/// the loader is only called once the table is fully written and closed.
#[instrument(level = "info", skip_all, fields(output = %config.output_path.display()))]
pub fn run(config: &EtlConfig, loader: &dyn StorageLoader) -> Result<RunSummary> {
    let dataset = extract(config)?;
    csv_write::write_dataset(&config.output_path, &dataset)?;
    info!(row_count = dataset.records.len(), "wrote output table");
    load(loader, &config.output_path)?;
    Ok(RunSummary {
        columns: dataset.columns.len(),
        records: dataset.records.len(),
        output: config.output_path.clone(),
    })
}

fn load(loader: &dyn StorageLoader, path: &Path) -> Result<()> {
    loader.load_csv(path).inspect_err(|error| {
        tracing::error!(path = %path.display(), %error, "storage load failed");
    })
}

/// Final status of one run, classified by failure kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Success(RunSummary),
    NotFound(String),
    IoFailure(String),
    FormatError(String),
    /// Anything outside the three expected kinds. Carries the original detail.
    UnknownFailure(String),
}

impl RunOutcome {
    pub fn from_result(result: Result<RunSummary>) -> Self {
        match result {
            Ok(summary) => RunOutcome::Success(summary),
            Err(error) => Self::from_error(&error),
        }
    }

    pub fn from_error(error: &EtlError) -> Self {
        let message = error.to_string();
        match error.kind() {
            ErrorKind::NotFound => RunOutcome::NotFound(message),
            ErrorKind::Io => RunOutcome::IoFailure(message),
            ErrorKind::Format => RunOutcome::FormatError(message),
            ErrorKind::Unknown => RunOutcome::UnknownFailure(message),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Success(_))
    }

    /// One-line human readable status for the console.
    pub fn message(&self) -> String {
        match self {
            RunOutcome::Success(summary) => format!(
                "ETL process completed successfully! ({} columns, {} records written to {})",
                summary.columns,
                summary.records,
                summary.output.display()
            ),
            RunOutcome::NotFound(detail) => format!("File not found: {detail}"),
            RunOutcome::IoFailure(detail) => format!("I/O error occurred: {detail}"),
            RunOutcome::FormatError(detail) => format!("Value error: {detail}"),
            RunOutcome::UnknownFailure(detail) => {
                format!("An unexpected error occurred: {detail}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormatReason;

    #[test]
    fn outcome_follows_error_kind() {
        let not_found = EtlError::NotFound {
            path: PathBuf::from("cols.txt"),
        };
        assert!(matches!(
            RunOutcome::from_error(&not_found),
            RunOutcome::NotFound(_)
        ));

        let format = EtlError::Format {
            path: PathBuf::from("cols.txt"),
            line_number: 1,
            line: "x".to_string(),
            reason: FormatReason::FieldCount(1),
        };
        assert!(matches!(
            RunOutcome::from_error(&format),
            RunOutcome::FormatError(_)
        ));
    }

    #[test]
    fn unknown_failure_keeps_detail() {
        let outcome = RunOutcome::from_error(&EtlError::Storage("bucket offline".to_string()));
        assert_eq!(
            outcome.message(),
            "An unexpected error occurred: storage load failed: bucket offline"
        );
        assert!(!outcome.is_success());
    }
}
