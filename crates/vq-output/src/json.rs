//! JSON output backend.
//!
//! Creates `results.json` in the output directory.  Records are buffered and
//! the array is written on [`finish`](OutputWriter::finish).

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;
use vq_sweep::CombinationResult;

use crate::writer::OutputWriter;
use crate::{OutputResult, ResultRecord};

/// Writes results as a pretty-printed JSON array.
pub struct JsonWriter {
    path:     PathBuf,
    out:      BufWriter<File>,
    records:  Vec<ResultRecord>,
    finished: bool,
}

impl JsonWriter {
    /// Create (or truncate) `results.json` in `dir`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let path = dir.join("results.json");
        let out = BufWriter::new(File::create(&path)?);
        Ok(Self { path, out, records: Vec::new(), finished: false })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputWriter for JsonWriter {
    fn write_results(&mut self, results: &[CombinationResult]) -> OutputResult<()> {
        self.records.extend(results.iter().map(ResultRecord::from));
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        serde_json::to_writer_pretty(&mut self.out, &self.records)?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        debug!(path = %self.path.display(), records = self.records.len(), "results.json written");
        Ok(())
    }
}
