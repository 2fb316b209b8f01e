//! # Chatstats
//!
//! Activity statistics for exported WhatsApp chat transcripts.
//!
//! ## Overview
//!
//! Chatstats reads the plain-text transcript produced by WhatsApp's
//! "Export chat" feature (bracketed format, e.g.
//! `[15/01/24, 10:30:45] Alice: Hello`) and computes:
//!
//! - headline numbers: message and word totals, participants, date range
//! - activity over time: per year, month, hour and weekday
//! - activity per participant, broken down by content kind
//!   (text, image, sticker, audio, video, document)
//! - the busiest days, word counts and average message length
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatstats::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let records = TranscriptParser::new().parse_file("chat.txt")?;
//!     let result = analyze(&records)?;
//!
//!     println!("{} messages from {} people",
//!         result.summary.total_messages,
//!         result.summary.participants.len());
//!
//!     write_json(&result, "analysis.json", &OutputConfig::new())?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`TranscriptParser`](parser::TranscriptParser), file and
//!   string entry points
//! - [`parsing`] - line grammar, timestamp parsing, content classification
//! - [`message`] - [`MessageRecord`] and [`MessageKind`]
//! - [`core`] - aggregation, filtering and writers
//!   - [`core::analyzer`] - [`analyze`](core::analyze), [`Analyzer`](core::Analyzer)
//!   - [`core::models`] - [`AnalysisResult`](core::AnalysisResult) and friends
//!   - [`core::filter`] - [`FilterConfig`](core::FilterConfig)
//!   - [`core::output`] - JSON and CSV writers
//! - [`config`] - [`AnalysisConfig`](config::AnalysisConfig),
//!   [`OutputConfig`](config::OutputConfig)
//! - [`format`] - [`OutputFormat`](format::OutputFormat) dispatch
//! - [`error`] - [`ChatstatsError`], [`Result`]
//! - [`prelude`] - convenient re-exports
//!
//! ## Logging
//!
//! The library emits [`tracing`] events (parse and analysis statistics at
//! `debug`). It never installs a subscriber; the `chatstats` binary does.

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use error::{ChatstatsError, Result};
pub use message::{MessageKind, MessageRecord};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatstats::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{ChatstatsError, Result};
    pub use crate::message::{MessageKind, MessageRecord};

    pub use crate::parser::{ParseReport, TranscriptParser};

    pub use crate::config::{AnalysisConfig, OutputConfig};

    pub use crate::core::analyzer::{Analyzer, analyze};
    pub use crate::core::models::{AnalysisResult, DateRange, EmptyReport, Summary};

    pub use crate::core::filter::{FilterConfig, apply_filters};

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, write_json};

    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
}
