//! Analysis pipeline.
//!
//! - [`models`] - result types
//! - [`analyzer`] - the aggregation engine
//! - [`filter`] - record filtering by date and sender
//! - [`output`] - JSON and CSV writers
//!
//! # Quick Start
//!
//! ```rust
//! # #[cfg(feature = "json-output")]
//! # fn example() -> chatstats::Result<()> {
//! use chatstats::config::OutputConfig;
//! use chatstats::core::{FilterConfig, analyze, apply_filters, to_json};
//! use chatstats::parser::TranscriptParser;
//!
//! let records = TranscriptParser::new().parse_file("chat.txt")?;
//! let records = apply_filters(records, &FilterConfig::new().with_user("Alice"));
//! let json = to_json(&analyze(&records)?, &OutputConfig::new())?;
//! # Ok(())
//! # }
//! ```

pub mod analyzer;
pub mod filter;
pub mod models;
pub mod output;

pub use analyzer::{Analyzer, analyze};
pub use filter::{FilterConfig, apply_filters};
pub use models::{AnalysisResult, DateRange, EmptyReport, Summary};

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, write_json};
