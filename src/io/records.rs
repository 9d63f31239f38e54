use std::io::BufRead;
use std::path::Path;

use tracing::{debug, instrument};

use crate::error::{EtlError, Result};
use crate::io::{FIELD_DELIMITER, open_source, report};
use crate::model::Record;

/// Reads every line of the data file at `path` as a [`Record`].
///
/// One record is produced per line, blank lines included, and field counts are
/// not checked against any header.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    let reader = open_source(path)?;
    let mut records = Vec::new();

    for line in reader.lines() {
        let line = line.map_err(|source| report(EtlError::from_io(path, source)))?;
        records.push(parse_record(&line));
    }

    debug!(record_count = records.len(), "parsed records");
    Ok(records)
}

/// Splits one trimmed line on the field delimiter. An empty line yields a
/// single empty field.
pub fn parse_record(line: &str) -> Record {
    line.trim()
        .split(FIELD_DELIMITER)
        .map(str::to_string)
        .collect()
}
