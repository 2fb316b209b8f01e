//! # chatstats CLI
//!
//! Command-line interface for the chatstats library.
//!
//! Without `-o` the report is the only thing written to stdout. With `-o`
//! the report goes to the file and a short summary is printed instead.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use chatstats::ChatstatsError;
use chatstats::cli::Args;
use chatstats::config::{AnalysisConfig, OutputConfig};
use chatstats::core::{AnalysisResult, Analyzer, EmptyReport, FilterConfig, apply_filters};
use chatstats::core::{to_json, write_json};
use chatstats::format::{OutputFormat, to_format_string, write_to_format};
use chatstats::parser::TranscriptParser;

fn main() {
    let args = <Args as ClapParser>::parse();
    setup_logging(&args.log_level);

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

/// Installs the stderr subscriber. `RUST_LOG` overrides `--log-level`.
fn setup_logging(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .init();
}

fn run(args: &Args) -> Result<(), ChatstatsError> {
    let total_start = Instant::now();
    let format: OutputFormat = args.format.into();
    let output_config = if args.compact {
        OutputConfig::compact()
    } else {
        OutputConfig::new()
    };

    let filter_config = build_filter(args)?;

    if let Some(ref output) = args.output {
        println!("📊 chatstats v{}", env!("CARGO_PKG_VERSION"));
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("📂 Input:   {}", args.input);
        println!("💾 Output:  {}", output);
        println!("📄 Format:  {}", format);
        if let Some(ref after) = args.after {
            println!("📅 After:   {}", after);
        }
        if let Some(ref before) = args.before {
            println!("📅 Before:  {}", before);
        }
        if let Some(ref from) = args.from {
            println!("👤 From:    {}", from);
        }
        println!();
    }

    let parse_start = Instant::now();
    let records = TranscriptParser::new().parse_file(&args.input)?;
    let parsed_count = records.len();
    info!(
        records = parsed_count,
        elapsed_ms = parse_start.elapsed().as_millis(),
        "transcript parsed"
    );

    let records = apply_filters(records, &filter_config);
    if filter_config.is_active() {
        debug!(before = parsed_count, after = records.len(), "filters applied");
    }

    let analyzer =
        Analyzer::with_config(AnalysisConfig::new().with_most_active_days_limit(args.top_days));

    let result = match analyzer.analyze(&records) {
        Ok(result) => result,
        Err(ChatstatsError::EmptyTranscript) => {
            return emit_empty_report(args, &output_config);
        }
        Err(e) => return Err(e),
    };

    match args.output {
        None => {
            let rendered = to_format_string(&result, format, &output_config)?;
            println!("{}", rendered.trim_end());
        }
        Some(ref output) => {
            write_to_format(&result, output, format, &output_config)?;
            print_summary(&result, parsed_count, total_start);
            println!();
            println!("Analysis saved to {}", output);
        }
    }

    Ok(())
}

fn build_filter(args: &Args) -> Result<FilterConfig, ChatstatsError> {
    let mut filter_config = FilterConfig::new();

    if let Some(ref after) = args.after {
        filter_config = filter_config.after_date(after)?;
    }
    if let Some(ref before) = args.before {
        filter_config = filter_config.before_date(before)?;
    }
    if let Some(ref from) = args.from {
        filter_config = filter_config.with_user(from.clone());
    }

    Ok(filter_config)
}

/// Writes the empty-transcript document where the report would have gone.
///
/// Always JSON, whatever `--format` says.
fn emit_empty_report(args: &Args, output_config: &OutputConfig) -> Result<(), ChatstatsError> {
    let report = EmptyReport::new();
    info!("no messages found");

    match args.output {
        None => println!("{}", to_json(&report, output_config)?),
        Some(ref output) => {
            write_json(&report, output, output_config)?;
            println!("⚠️  {}", report.error);
            println!("Analysis saved to {}", output);
        }
    }

    Ok(())
}

fn print_summary(result: &AnalysisResult, parsed_count: usize, total_start: Instant) {
    let summary = &result.summary;

    println!("📈 Summary:");
    println!("   Parsed:        {} messages", parsed_count);
    if summary.total_messages != parsed_count {
        println!("   Analyzed:      {} messages", summary.total_messages);
    }
    println!("   Participants:  {}", summary.participants.len());
    println!(
        "   Date range:    {} → {} ({} days)",
        summary.date_range.start, summary.date_range.end, summary.chat_duration_days
    );
    println!("   Words:         {}", summary.total_words);
    if let Some((day, count)) = result.most_active_days.first() {
        println!("   Busiest day:   {} ({} messages)", day, count);
    }

    println!();
    println!("⚡ Done in {:.2}s", total_start.elapsed().as_secs_f64());
}
