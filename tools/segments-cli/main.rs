use clap::{Parser, ValueEnum};
use segments::prelude::*;
use std::fs;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// How each entry of the input file is interpreted.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeCli {
    /// Entries are variable mappings with a declared `value_type`
    Variables,
    /// The whole document is one bare value whose type is inferred from its shape
    Segments,
}

/// Builds typed variables or segments from a JSON file and prints them
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a JSON file. In `variables` mode it holds one mapping or an
    /// array of mappings; in `segments` mode the whole document is built as a
    /// single segment, so a top-level array becomes one array segment
    input_path: String,

    /// Optional path to a factory config JSON file
    #[arg(short, long)]
    config: Option<String>,

    /// How to interpret the entries
    #[arg(short, long, value_enum, default_value = "variables")]
    mode: ModeCli,

    /// Print secret values unredacted
    #[arg(long)]
    reveal: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let total_start = Instant::now();

    // --- 1. Loading ---
    let config = match &cli.config {
        Some(path) => FactoryConfig::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load config: {}", e))),
        None => FactoryConfig::default(),
    };
    let input_json = fs::read_to_string(&cli.input_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read input file '{}': {}",
            &cli.input_path, e
        ))
    });
    let input: serde_json::Value = serde_json::from_str(&input_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse input JSON: {}", e)));
    let entries = match input {
        serde_json::Value::Array(entries) if matches!(cli.mode, ModeCli::Variables) => entries,
        other => vec![other],
    };

    // --- 2. Building ---
    let factory = SegmentFactory::builder().with_config(config).build();
    let build_start = Instant::now();
    for (index, entry) in entries.iter().enumerate() {
        match cli.mode {
            ModeCli::Variables => {
                let mapping = entry.as_object().unwrap_or_else(|| {
                    exit_with_error(&format!("Entry {} is not a mapping", index))
                });
                let variable = factory
                    .build_variable_from_mapping(mapping)
                    .unwrap_or_else(|e| exit_with_error(&format!("Entry {}: {}", index, e)));
                println!(
                    "{} {} ({}) = {}",
                    variable.id(),
                    variable.name(),
                    variable.value_type(),
                    render(&variable, cli.reveal)
                );
                if let Some(description) = variable.description() {
                    println!("    {}", description);
                }
            }
            ModeCli::Segments => {
                let segment = factory
                    .build_segment(entry)
                    .unwrap_or_else(|e| exit_with_error(&format!("Entry {}: {}", index, e)));
                println!("({}) = {}", segment.value_type(), render(&segment, cli.reveal));
            }
        }
    }
    let build_duration = build_start.elapsed();

    println!("\n--- Summary ---");
    println!("Entries Built:        {}", entries.len());
    println!("Text Size Limit:      {} bytes", factory.validator().max_text_size());
    println!("Build:                {:?}", build_duration);
    println!("Total Execution:      {:?}", total_start.elapsed());
}

fn render(segment: &Segment, reveal: bool) -> String {
    if reveal { segment.text() } else { segment.log() }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
