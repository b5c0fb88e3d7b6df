//! CSV output backend.
//!
//! Creates `results.csv` in the output directory; see
//! [`csv_header`](crate::csv_header) for the columns.

use std::fs::File;
use std::path::{Path, PathBuf};

use ::csv::Writer;
use tracing::debug;
use vq_sweep::CombinationResult;

use crate::row::{csv_header, csv_row};
use crate::writer::OutputWriter;
use crate::OutputResult;

/// Writes one flat row per combination.
pub struct CsvWriter {
    path:     PathBuf,
    rows:     Writer<File>,
    written:  usize,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) `results.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let path = dir.join("results.csv");
        let mut rows = Writer::from_path(&path)?;
        rows.write_record(csv_header())?;
        Ok(Self { path, rows, written: 0, finished: false })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputWriter for CsvWriter {
    fn write_results(&mut self, results: &[CombinationResult]) -> OutputResult<()> {
        for result in results {
            self.rows.write_record(csv_row(result))?;
        }
        self.written += results.len();
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rows.flush()?;
        debug!(path = %self.path.display(), rows = self.written, "results.csv written");
        Ok(())
    }
}
