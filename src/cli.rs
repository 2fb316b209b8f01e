//! Command-line interface definition using clap.
//!
//! - [`Args`] - CLI argument structure
//! - [`OutputFormat`] - `--format` values, convertible to
//!   [`format::OutputFormat`](crate::format::OutputFormat)

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// Activity statistics for an exported WhatsApp chat transcript.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstats")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstats chat.txt
    chatstats chat.txt -o analysis.json
    chatstats chat.txt -o participants.csv --format csv
    chatstats chat.txt --after 2024-01-01 --before 2024-06-30 --from Alice
    chatstats chat.txt --top-days 5 --compact")]
pub struct Args {
    /// Path to the exported chat transcript
    pub input: String,

    /// Write the report to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,

    /// Report format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Only count messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Only count messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Only count messages from this participant
    #[arg(long, value_name = "USER")]
    pub from: Option<String>,

    /// Number of entries in the most active days list
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub top_days: usize,

    /// Emit single-line JSON
    #[arg(long)]
    pub compact: bool,

    /// Log filter for diagnostics on stderr (RUST_LOG takes precedence)
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,
}

impl Args {
    /// Returns `true` when the report goes to stdout.
    pub fn is_stdout(&self) -> bool {
        self.output.is_none()
    }
}

/// Report format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Full JSON report (default)
    #[default]
    Json,

    /// Per-participant table with semicolon delimiter
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::format::OutputFormat::from(*self).fmt(f)
    }
}

impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["chatstats", "chat.txt"]).unwrap();
        assert_eq!(args.input, "chat.txt");
        assert!(args.is_stdout());
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.top_days, 10);
        assert!(!args.compact);
        assert_eq!(args.log_level, "warn");
    }

    #[test]
    fn test_all_flags() {
        let args = Args::try_parse_from([
            "chatstats",
            "chat.txt",
            "-o",
            "out.csv",
            "-f",
            "csv",
            "--after",
            "2024-01-01",
            "--before",
            "2024-02-01",
            "--from",
            "Alice",
            "--top-days",
            "3",
            "--compact",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(args.output.as_deref(), Some("out.csv"));
        assert_eq!(args.format, OutputFormat::Csv);
        assert_eq!(args.after.as_deref(), Some("2024-01-01"));
        assert_eq!(args.before.as_deref(), Some("2024-02-01"));
        assert_eq!(args.from.as_deref(), Some("Alice"));
        assert_eq!(args.top_days, 3);
        assert!(args.compact);
        assert_eq!(args.log_level, "debug");
    }

    #[test]
    fn test_input_required() {
        assert!(Args::try_parse_from(["chatstats"]).is_err());
    }

    #[test]
    fn test_format_conversion() {
        assert_eq!(
            crate::format::OutputFormat::from(OutputFormat::Csv),
            crate::format::OutputFormat::Csv
        );
        assert_eq!(OutputFormat::Json.to_string(), "JSON");
    }
}
