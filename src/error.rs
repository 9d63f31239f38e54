use std::path::{Path, PathBuf};

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, EtlError>;

/// Error type covering the different failure cases that can occur while the
/// tool extracts the source files, writes the table, or hands it to storage.
#[derive(Debug, Error)]
pub enum EtlError {
    /// Raised when a required input file does not exist.
    #[error("file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// Wrapper for any other IO failure while opening, reading, or writing.
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Raised when a column definition line does not follow `index|name`.
    #[error("{reason} in '{}' at line {line_number}: '{line}'", .path.display())]
    Format {
        path: PathBuf,
        line_number: usize,
        line: String,
        reason: FormatReason,
    },

    /// Errors bubbled up from the CSV encoder.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Raised when a configuration file does not deserialise into
    /// [`EtlConfig`](crate::config::EtlConfig).
    #[error("invalid configuration in '{}': {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Raised by the storage collaborator; its details are opaque to the pipeline.
    #[error("storage load failed: {0}")]
    Storage(String),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

/// Why a column definition line was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatReason {
    /// The line did not split into exactly two parts.
    FieldCount(usize),
    /// The index part is not an integer.
    InvalidIndex,
}

impl std::fmt::Display for FormatReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatReason::FieldCount(found) => {
                write!(f, "expected 'index|column_name' but found {found} part(s)")
            }
            FormatReason::InvalidIndex => write!(f, "unable to convert index to integer"),
        }
    }
}

/// Coarse classification used by the driver to report failures per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Io,
    Format,
    Unknown,
}

impl EtlError {
    /// Maps an IO error raised for `path` onto the not-found / IO split.
    pub fn from_io(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            EtlError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            EtlError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    /// Returns the failure kind the driver reports on.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EtlError::NotFound { .. } => ErrorKind::NotFound,
            EtlError::Io { .. } | EtlError::Csv(_) => ErrorKind::Io,
            EtlError::Format { .. } => ErrorKind::Format,
            EtlError::Config { .. } | EtlError::Storage(_) | EtlError::Logging(_) => {
                ErrorKind::Unknown
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_maps_to_not_found() {
        let error = EtlError::from_io(
            Path::new("missing.txt"),
            std::io::Error::from(std::io::ErrorKind::NotFound),
        );
        assert_eq!(error.kind(), ErrorKind::NotFound);
        assert_eq!(error.to_string(), "file not found: missing.txt");
    }

    #[test]
    fn other_io_failures_map_to_io() {
        let error = EtlError::from_io(
            Path::new("locked.txt"),
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        assert_eq!(error.kind(), ErrorKind::Io);
    }

    #[test]
    fn format_message_includes_raw_line() {
        let error = EtlError::Format {
            path: PathBuf::from("cols.txt"),
            line_number: 3,
            line: "abc|name".to_string(),
            reason: FormatReason::InvalidIndex,
        };
        let message = error.to_string();
        assert!(message.contains("'abc|name'"), "{message}");
        assert!(message.contains("line 3"), "{message}");
        assert_eq!(error.kind(), ErrorKind::Format);
    }
}
