// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The SnapText Authors
//
// CSV export — append one quoted row per invocation to a fixed-path file.
//
// The artifact is append-only across invocations: the first export of a
// file's lifetime writes a single `Text Data` header row, every export
// (including the first) appends exactly one data row. Rows are written with
// RFC 4180 quoting — values always surrounded by double quotes, embedded
// quotes doubled — so multi-line or quote-bearing text survives a round trip
// through a spreadsheet.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, WriterBuilder};
use snaptext_core::error::{Result, SnapTextError};
use tracing::{debug, instrument};

/// Column header written once per file lifetime.
const HEADER: &str = "Text Data";

/// Appends text rows to a fixed-path CSV artifact.
pub struct CsvExporter {
    path: PathBuf,
}

impl CsvExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The artifact path this exporter writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one data row containing `text`.
    ///
    /// Opens the file in append mode, writes the header first if the file
    /// does not exist yet, and flushes before returning. Each call is a
    /// single atomic append of one row; there is no partial-write recovery
    /// and no retry.
    #[instrument(skip(self, text), fields(path = %self.path.display(), text_len = text.len()))]
    pub fn append_row(&self, text: &str) -> Result<()> {
        // Existence must be checked before the open call creates the file,
        // otherwise the header would never be written.
        let is_new = !self.path.exists();

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|err| {
                SnapTextError::CsvError(format!("cannot open {}: {}", self.path.display(), err))
            })?;

        if is_new {
            // The header stays unquoted; only data rows carry quotes.
            let mut header = WriterBuilder::new()
                .quote_style(QuoteStyle::Necessary)
                .from_writer(&file);
            header
                .write_record([HEADER])
                .map_err(|err| SnapTextError::CsvError(err.to_string()))?;
            header
                .flush()
                .map_err(|err| SnapTextError::CsvError(err.to_string()))?;
        }

        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Always)
            .from_writer(&file);
        writer
            .write_record([text])
            .map_err(|err| SnapTextError::CsvError(err.to_string()))?;
        writer
            .flush()
            .map_err(|err| SnapTextError::CsvError(err.to_string()))?;

        debug!(new_file = is_new, "CSV row appended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn first_export_writes_header_then_quoted_row() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.csv");
        let exporter = CsvExporter::new(&path);

        exporter.append_row("Hello World").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "Text Data\n\"Hello World\"\n");
    }

    #[test]
    fn n_exports_yield_one_header_and_n_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.csv");
        let exporter = CsvExporter::new(&path);

        for _ in 0..3 {
            exporter.append_row("X").unwrap();
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Text Data");
        assert!(lines[1..].iter().all(|l| *l == "\"X\""));
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.csv");
        let exporter = CsvExporter::new(&path);

        exporter.append_row(r#"say "hi""#).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "Text Data\n\"say \"\"hi\"\"\"\n");
    }

    #[test]
    fn multiline_text_stays_one_record() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.csv");
        let exporter = CsvExporter::new(&path);

        exporter.append_row("line one\nline two").unwrap();
        exporter.append_row("second record").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "Text Data\n\"line one\nline two\"\n\"second record\"\n"
        );

        // A CSV reader sees exactly two data records.
        let mut reader = csv::ReaderBuilder::new().from_path(&path).unwrap();
        assert_eq!(reader.records().count(), 2);
    }

    #[test]
    fn unwritable_path_is_a_csv_error() {
        let exporter = CsvExporter::new("/nonexistent-dir/data.csv");
        assert!(matches!(
            exporter.append_row("X"),
            Err(SnapTextError::CsvError(_))
        ));
    }
}
