//! Example: Using chatstats as a library
//!
//! Run with: cargo run --example library_usage

use chatstats::prelude::*;

const TRANSCRIPT: &str = "\
[01/01/23, 09:00:00] Alice: Hello there
[01/01/23, 09:05:00] Bob: image omitted
[01/01/23, 23:00:00] Alice: good night
[02/01/2023, 08:15:30] Bob: Morning! Did you get the photo?
and a second line that is not a message
[02/01/23, 08:16:02] Alice: \u{200E}sticker omitted
[30/02/23, 10:00:00] Bob: this date does not exist";

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("=== chatstats Library Usage Examples ===\n");

    // Example 1: Parse a transcript and inspect the report
    println!("1. Parsing a transcript:");
    let parser = TranscriptParser::new();
    let (records, report) = parser.parse_str_with_report(TRANSCRIPT)?;

    for record in &records {
        println!(
            "   [{}] {} ({}): {}",
            record.timestamp(),
            record.sender(),
            record.kind(),
            record.content()
        );
    }
    println!(
        "   {} lines, {} records, {} dropped",
        report.lines,
        report.records,
        report.dropped()
    );

    // Example 2: Aggregate
    println!("\n2. Aggregating:");
    let result = analyze(&records)?;
    let summary = &result.summary;
    println!("   Messages:     {}", summary.total_messages);
    println!("   Participants: {}", summary.participants.join(", "));
    println!(
        "   Range:        {} → {} ({} days)",
        summary.date_range.start, summary.date_range.end, summary.chat_duration_days
    );
    for (participant, avg) in &result.avg_message_length {
        println!("   {participant} averages {avg:.1} characters per text message");
    }

    // Example 3: Filter before aggregating
    println!("\n3. Filtering (Bob, from 2023-01-02):");
    let filter = FilterConfig::new().after_date("2023-01-02")?.with_user("bob");
    let bob = analyze(&apply_filters(records.clone(), &filter))?;
    println!("   {} messages", bob.summary.total_messages);

    // Example 4: Custom analysis settings
    println!("\n4. Keeping only the busiest day:");
    let analyzer = Analyzer::with_config(AnalysisConfig::new().with_most_active_days_limit(1));
    let top = analyzer.analyze(&records)?;
    for (day, count) in &top.most_active_days {
        println!("   {day}: {count} messages");
    }

    // Example 5: Output formats
    println!("\n5. Output formats:");
    println!("{}", to_json(&top, &OutputConfig::compact())?);
    println!("{}", to_csv(&result)?);

    // Example 6: Empty transcripts
    println!("6. Empty transcript:");
    match analyze(&[]) {
        Err(e) if e.is_empty_transcript() => {
            println!("   {}", to_json(&EmptyReport::new(), &OutputConfig::compact())?);
        }
        other => println!("   unexpected: {:?}", other.map(|r| r.summary)),
    }

    println!("\n=== Done ===");
    Ok(())
}
