use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{QuoteStyle, Writer, WriterBuilder};
use tracing::{debug, instrument};

use crate::error::{EtlError, Result};
use crate::io::report;
use crate::model::{Dataset, Record};

/// Writes `header` followed by one line per row to `path` as CSV, replacing
/// any existing file.
///
/// Fields are quoted only when they contain a comma, a quote, or a line break.
/// Rows may differ in length from the header, and an empty row becomes a bare
/// line terminator. A partially written file is left in place if writing fails.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn write_table(path: &Path, header: &[String], rows: &[Record]) -> Result<()> {
    let file = File::create(path).map_err(|source| {
        report(EtlError::Io {
            path: path.to_path_buf(),
            source,
        })
    })?;
    let mut writer = WriterBuilder::new()
        .flexible(true)
        .quote_style(QuoteStyle::Necessary)
        .from_writer(file);

    write_row(&mut writer, header).map_err(|e| report(e.into()))?;
    for row in rows {
        write_row(&mut writer, row).map_err(|e| report(e.into()))?;
    }
    writer.flush().map_err(|source| {
        report(EtlError::Io {
            path: path.to_path_buf(),
            source,
        })
    })?;

    debug!(row_count = rows.len(), "table written");
    Ok(())
}

// csv encodes an empty record as `""`, which reads back as one empty field.
fn write_row<W: Write>(writer: &mut Writer<W>, fields: &[String]) -> csv::Result<()>
where
    for<'a> &'a W: Write,
{
    if fields.is_empty() {
        writer.flush()?;
        writer.get_ref().write_all(b"\n")?;
        return Ok(());
    }
    writer.write_record(fields)
}

/// Writes a [`Dataset`] with its catalog as the header row.
pub fn write_dataset(path: &Path, dataset: &Dataset) -> Result<()> {
    write_table(path, dataset.columns.names(), &dataset.records)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    fn row(fields: &[&str]) -> Record {
        fields.iter().map(|field| field.to_string()).collect()
    }

    #[test]
    fn writes_header_then_rows() {
        let dir = tempdir().expect("temporary directory");
        let path = dir.path().join("out.csv");
        let header = row(&["a", "b"]);

        write_table(&path, &header, &[row(&["1", "2"]), row(&["3", "4"])])
            .expect("table written");

        assert_eq!(fs::read_to_string(&path).unwrap(), "a,b\n1,2\n3,4\n");
    }

    #[test]
    fn quotes_fields_that_need_it() {
        let dir = tempdir().expect("temporary directory");
        let path = dir.path().join("out.csv");

        write_table(&path, &row(&["v"]), &[row(&["x,y"]), row(&["say \"hi\""])])
            .expect("table written");

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "v\n\"x,y\"\n\"say \"\"hi\"\"\"\n"
        );
    }

    #[test]
    fn rows_may_differ_from_header_width() {
        let dir = tempdir().expect("temporary directory");
        let path = dir.path().join("out.csv");

        write_table(
            &path,
            &row(&["a", "b"]),
            &[row(&["1"]), row(&["1", "2", "3"])],
        )
        .expect("table written");

        assert_eq!(fs::read_to_string(&path).unwrap(), "a,b\n1\n1,2,3\n");
    }

    #[test]
    fn empty_rows_are_bare_line_terminators() {
        let dir = tempdir().expect("temporary directory");
        let path = dir.path().join("out.csv");

        write_table(&path, &[], &[row(&[""]), Vec::new(), row(&["a"])]).expect("table written");

        assert_eq!(fs::read_to_string(&path).unwrap(), "\n\"\"\n\na\n");
    }

    #[test]
    fn truncates_existing_file() {
        let dir = tempdir().expect("temporary directory");
        let path = dir.path().join("out.csv");
        fs::write(&path, "stale content that is longer than the new table\n").unwrap();

        write_table(&path, &row(&["a"]), &[]).expect("table written");

        assert_eq!(fs::read_to_string(&path).unwrap(), "a\n");
    }

    #[test]
    fn unwritable_target_is_io_failure() {
        let dir = tempdir().expect("temporary directory");
        let path = dir.path().join("missing").join("out.csv");

        let error = write_table(&path, &row(&["a"]), &[]).unwrap_err();

        assert_eq!(error.kind(), crate::error::ErrorKind::Io);
    }
}
