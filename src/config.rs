use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{EtlError, Result};

/// Catalog path used when nothing else is configured.
pub const DEFAULT_COLUMNS_PATH: &str = "data/source/SOURCECOLUMNS.txt";
/// Data path used when nothing else is configured.
pub const DEFAULT_DATA_PATH: &str = "data/source/SOURCEDATA.txt";
/// Output table path used when nothing else is configured.
pub const DEFAULT_OUTPUT_PATH: &str = "transformed_data.csv";

/// Locations of the files a single run reads and writes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EtlConfig {
    /// Pipe-delimited `index|name` column catalog.
    pub columns_path: PathBuf,
    /// Pipe-delimited data file.
    pub data_path: PathBuf,
    /// Destination of the CSV table. Overwritten on every run.
    pub output_path: PathBuf,
    /// Directory the finished table is staged into. `None` leaves the table
    /// where it was written.
    pub storage_dir: Option<PathBuf>,
}

impl Default for EtlConfig {
    fn default() -> Self {
        Self {
            columns_path: PathBuf::from(DEFAULT_COLUMNS_PATH),
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            storage_dir: None,
        }
    }
}

impl EtlConfig {
    /// Loads a JSON configuration file. Keys that are absent keep their
    /// defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|source| EtlError::from_io(path, source))?;
        serde_json::from_str(&data).map_err(|source| EtlError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempdir().expect("temporary directory");
        let path = dir.path().join("etl.json");
        fs::write(&path, r#"{"output_path": "out/table.csv"}"#).unwrap();

        let config = EtlConfig::from_file(&path).expect("config loaded");

        assert_eq!(config.output_path, PathBuf::from("out/table.csv"));
        assert_eq!(config.columns_path, PathBuf::from(DEFAULT_COLUMNS_PATH));
        assert_eq!(config.storage_dir, None);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempdir().expect("temporary directory");
        let path = dir.path().join("etl.json");
        fs::write(&path, r#"{"colums_path": "typo.txt"}"#).unwrap();

        let error = EtlConfig::from_file(&path).unwrap_err();

        assert!(matches!(error, EtlError::Config { .. }), "{error:?}");
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempdir().expect("temporary directory");
        let error = EtlConfig::from_file(&dir.path().join("absent.json")).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::NotFound);
    }
}
