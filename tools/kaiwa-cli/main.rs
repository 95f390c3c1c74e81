use clap::Parser;
use itertools::Itertools;
use kaiwa::prelude::*;
use std::time::Instant;

/// A validation and normalization CLI for conversational flow documents
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the flow JSON file
    flow_path: String,

    /// Re-emit the normalized canonical document after validating
    #[arg(short, long)]
    pretty: bool,

    /// Print violations as a JSON array instead of a text report
    #[arg(long)]
    json_errors: bool,
}

fn main() {
    let cli = Cli::parse();
    let total_start = Instant::now();

    // --- 1. Load and parse (the import boundary) ---
    let document = FlowDocument::from_file(&cli.flow_path)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));

    println!(
        "Loaded '{}': {} node(s), {} edge(s)",
        cli.flow_path,
        document.nodes.len(),
        document.edge_count()
    );

    // --- 2. Validate ---
    let errors = validate(&document);

    if errors.is_empty() {
        println!("Flow is valid.");
    } else if cli.json_errors {
        match serde_json::to_string_pretty(&errors) {
            Ok(json) => println!("{}", json),
            Err(e) => exit_with_error(&format!("Failed to serialize violations: {}", e)),
        }
    } else {
        println!("\n{} violation(s) found:", errors.len());
        let report = errors
            .iter()
            .map(|e| format!("  [{}] {}", e.field, e.message))
            .join("\n");
        println!("{}", report);
    }

    // --- 3. Optional normalized export ---
    if cli.pretty {
        println!("\n{}", document.to_json_pretty());
    }

    println!("\nFinished in {:?}", total_start.elapsed());

    if !errors.is_empty() {
        std::process::exit(1);
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
