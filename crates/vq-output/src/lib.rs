//! `vq-output`: sweep result writers for the rust_vq simulator.
//!
//! | Writer         | File created     | Layout                                       |
//! |----------------|------------------|----------------------------------------------|
//! | [`JsonWriter`] | `results.json`   | array of nested records, one per combination |
//! | [`CsvWriter`]  | `results.csv`    | one flat row per combination                 |
//!
//! Both implement [`OutputWriter`].  `lam` and `rho` are rounded to three
//! decimals in both files; every other value is written at full precision.
//!
//! # Usage
//!
//! ```rust,ignore
//! use vq_output::{CsvWriter, JsonWriter, OutputWriter};
//!
//! let mut json = JsonWriter::new(Path::new("./out"))?;
//! json.write_results(&results)?;
//! json.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod json;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use json::JsonWriter;
pub use row::{ResultRecord, csv_header, csv_row, round3};
pub use writer::OutputWriter;
