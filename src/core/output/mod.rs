//! Report writers.
//!
//! - [`write_json`] / [`to_json`] - the full result document, requires the
//!   `json-output` feature
//! - [`write_csv`] / [`to_csv`] - per-participant table with semicolon
//!   delimiter, requires the `csv-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatstats::Result<()> {
//! use chatstats::config::OutputConfig;
//! use chatstats::core::analyze;
//! use chatstats::core::output::{to_csv, write_json};
//! use chatstats::parser::TranscriptParser;
//!
//! let records = TranscriptParser::new().parse_file("chat.txt")?;
//! let result = analyze(&records)?;
//!
//! write_json(&result, "analysis.json", &OutputConfig::new())?;
//! let table = to_csv(&result)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{CSV_HEADER, to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
