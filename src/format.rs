//! Report formats.
//!
//! [`OutputFormat`] names a serialization of an
//! [`AnalysisResult`](crate::core::AnalysisResult) independently of any CLI
//! framework. [`write_to_format`] and [`to_format_string`] dispatch to the
//! matching writer.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatstats::Result<()> {
//! use chatstats::config::OutputConfig;
//! use chatstats::core::analyze;
//! use chatstats::format::{OutputFormat, to_format_string};
//! use chatstats::parser::TranscriptParser;
//!
//! let records = TranscriptParser::new().parse_str("[01/01/23, 09:00:00] Alice: Hello")?;
//! let result = analyze(&records)?;
//!
//! let format = OutputFormat::from_path("report.csv")?;
//! let table = to_format_string(&result, format, &OutputConfig::new())?;
//! assert!(table.starts_with("Participant;"));
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::OutputConfig;
use crate::core::models::AnalysisResult;
use crate::error::ChatstatsError;

/// Serialization of an analysis result.
///
/// - [`Json`](OutputFormat::Json) - the full result document (default)
/// - [`Csv`](OutputFormat::Csv) - a per-participant table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Every view, keyed by view name.
    #[default]
    Json,

    /// Semicolon-delimited participant table.
    ///
    /// Carries the per-participant views only; time-based views are
    /// available in JSON.
    Csv,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    ///
    /// ```rust
    /// use chatstats::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Json.extension(), "json");
    /// ```
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["json", "csv"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Json, OutputFormat::Csv]
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Json => "application/json",
            OutputFormat::Csv => "text/csv",
        }
    }

    /// Detects format from a file path's extension, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatsError::InvalidFormat`] for unknown or missing
    /// extensions.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ChatstatsError> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(ChatstatsError::invalid_format(
                "output",
                format!(
                    "Unknown file extension: '.{}'. Expected one of: {}",
                    ext,
                    OutputFormat::all_names().join(", ")
                ),
            )),
        }
    }

    /// Cargo feature that enables the writer for this format.
    fn feature(self) -> &'static str {
        match self {
            OutputFormat::Json => "json-output",
            OutputFormat::Csv => "csv-output",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

fn feature_disabled(format: OutputFormat) -> ChatstatsError {
    ChatstatsError::invalid_format(
        "output",
        format!(
            "Output format {} requires the '{}' feature to be enabled",
            format,
            format.feature()
        ),
    )
}

/// Writes a result to `path` in the given format.
///
/// `config` only affects JSON.
///
/// # Errors
///
/// Returns an error if the format's feature is disabled or the file cannot
/// be written.
#[allow(unused_variables)]
pub fn write_to_format(
    result: &AnalysisResult,
    path: impl AsRef<Path>,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<(), ChatstatsError> {
    match format {
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(result, path, config),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(result, path),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}

/// Renders a result as a string in the given format.
///
/// # Errors
///
/// Returns an error if the format's feature is disabled or serialization
/// fails.
#[allow(unused_variables)]
pub fn to_format_string(
    result: &AnalysisResult,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<String, ChatstatsError> {
    match format {
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(result, config),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(result),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}
