//! Hand-off point to whatever system ingests the finished CSV table.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::error::{EtlError, Result};

/// External collaborator that ingests a fully written CSV table.
///
/// Implementations are called at most once per run, after the table file has
/// been closed. Failures are reported as [`EtlError::Storage`].
pub trait StorageLoader {
    fn load_csv(&self, path: &Path) -> Result<()>;
}

/// Loads tables by copying them into a staging directory, which is created on
/// first use.
#[derive(Debug, Clone)]
pub struct StagingDirectory {
    root: PathBuf,
}

impl StagingDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl StorageLoader for StagingDirectory {
    #[instrument(
        level = "info",
        skip_all,
        fields(source = %path.display(), root = %self.root.display())
    )]
    fn load_csv(&self, path: &Path) -> Result<()> {
        let file_name = path
            .file_name()
            .ok_or_else(|| EtlError::Storage(format!("'{}' has no file name", path.display())))?;
        fs::create_dir_all(&self.root).map_err(|e| {
            EtlError::Storage(format!("cannot create '{}': {e}", self.root.display()))
        })?;
        let target = self.root.join(file_name);
        let bytes = fs::copy(path, &target).map_err(|e| {
            EtlError::Storage(format!(
                "cannot copy '{}' to '{}': {e}",
                path.display(),
                target.display()
            ))
        })?;
        info!(staged = %target.display(), bytes, "table staged");
        Ok(())
    }
}

/// Accepts every table without moving it anywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRun;

impl StorageLoader for DryRun {
    fn load_csv(&self, path: &Path) -> Result<()> {
        info!(path = %path.display(), "dry run, table left in place");
        Ok(())
    }
}
