//! The `OutputWriter` trait implemented by all result writers.

use vq_sweep::CombinationResult;

use crate::OutputResult;

/// Trait implemented by the JSON and CSV writers.
pub trait OutputWriter {
    /// Append a batch of results, in the order given.
    fn write_results(&mut self, results: &[CombinationResult]) -> OutputResult<()>;

    /// Flush and close the underlying file.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
