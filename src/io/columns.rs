use std::io::BufRead;
use std::path::Path;

use tracing::{debug, instrument};

use crate::error::{EtlError, FormatReason, Result};
use crate::io::{FIELD_DELIMITER, open_source, report};
use crate::model::{ColumnCatalog, ColumnDefinition};

/// Reads the column catalog at `path` and returns the names ordered by their
/// declared index.
///
/// Blank lines are skipped. Any other line must be `index|name`; the first
/// malformed line aborts the read and no partial catalog is returned.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn read_columns(path: &Path) -> Result<ColumnCatalog> {
    let reader = open_source(path)?;
    let mut definitions = Vec::new();

    for (offset, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| report(EtlError::from_io(path, source)))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let line_number = offset + 1;
        let definition = parse_column_definition(trimmed).map_err(|reason| {
            report(EtlError::Format {
                path: path.to_path_buf(),
                line_number,
                line: trimmed.to_string(),
                reason,
            })
        })?;
        definitions.push(definition);
    }

    debug!(
        definition_count = definitions.len(),
        "parsed column definitions"
    );
    Ok(ColumnCatalog::from_definitions(definitions))
}

/// Parses one catalog line into a [`ColumnDefinition`].
///
/// Surrounding whitespace of the line is ignored and whitespace around the
/// index is tolerated, but the name is kept exactly as written. Indices must
/// fit in an `i128`; anything wider is reported as [`FormatReason::InvalidIndex`].
pub fn parse_column_definition(
    line: &str,
) -> std::result::Result<ColumnDefinition, FormatReason> {
    let parts: Vec<&str> = line.trim().split(FIELD_DELIMITER).collect();
    let [index, name] = parts.as_slice() else {
        return Err(FormatReason::FieldCount(parts.len()));
    };
    let index = index
        .trim()
        .parse::<i128>()
        .map_err(|_| FormatReason::InvalidIndex)?;
    Ok(ColumnDefinition::new(index, *name))
}
