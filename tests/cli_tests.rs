//! Additional tests for CLI argument types

use chatstats::cli::{Args, OutputFormat};
use clap::{Parser, ValueEnum};

#[test]
fn test_output_format_value_variants() {
    let names: Vec<String> = OutputFormat::value_variants()
        .iter()
        .filter_map(|v| v.to_possible_value())
        .map(|v| v.get_name().to_string())
        .collect();
    assert_eq!(names, vec!["json", "csv"]);
}

#[test]
fn test_output_format_from_str_ignoring_case() {
    assert_eq!(OutputFormat::from_str("CSV", true).unwrap(), OutputFormat::Csv);
    assert_eq!(
        OutputFormat::from_str("json", false).unwrap(),
        OutputFormat::Json
    );
    assert!(OutputFormat::from_str("jsonl", true).is_err());
    assert!(OutputFormat::from_str("", true).is_err());
}

#[test]
fn test_output_format_library_conversion() {
    for format in OutputFormat::value_variants() {
        let lib: chatstats::format::OutputFormat = (*format).into();
        assert_eq!(format.to_string(), lib.to_string());
    }
}

#[test]
fn test_args_invalid_top_days() {
    assert!(Args::try_parse_from(["chatstats", "chat.txt", "--top-days", "-1"]).is_err());
    assert!(Args::try_parse_from(["chatstats", "chat.txt", "--top-days", "many"]).is_err());
}

#[test]
fn test_args_long_and_short_flags_agree() {
    let short =
        Args::try_parse_from(["chatstats", "chat.txt", "-o", "x.csv", "-f", "csv"]).unwrap();
    let long = Args::try_parse_from([
        "chatstats",
        "chat.txt",
        "--output",
        "x.csv",
        "--format",
        "csv",
    ])
    .unwrap();

    assert_eq!(short.output, long.output);
    assert_eq!(short.format, long.format);
    assert!(!short.is_stdout());
}

#[test]
fn test_args_filters_are_raw_strings() {
    // Date validation happens when the filter is built, not during parsing
    let args = Args::try_parse_from(["chatstats", "chat.txt", "--after", "not-a-date"]).unwrap();
    assert_eq!(args.after.as_deref(), Some("not-a-date"));
}

#[test]
fn test_output_format_serde() {
    assert_eq!(serde_json::to_string(&OutputFormat::Csv).unwrap(), "\"csv\"");
    let parsed: OutputFormat = serde_json::from_str("\"json\"").unwrap();
    assert_eq!(parsed, OutputFormat::Json);
}
