//! Pareto Panel CLI
//!
//! Runs the Pareto transformation pipeline over a JSON frame set and writes
//! a versioned analysis report, the same shape the dashboard panel consumes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

mod commands;

use commands::{execute_analyze, validate_args, AnalyzeArgs};
use pareto_panel::output::read_report;
use pareto_panel::utils::config::{PanelOptions, SCHEMA_VERSION};

/// Pareto Panel - ranked frequencies and cumulative percentages
#[derive(Parser, Debug)]
#[command(name = "pareto")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a frame set and write a report
    Analyze {
        /// Path to the JSON frame-set file
        #[arg(short, long)]
        input: PathBuf,

        /// Output path for the JSON report
        #[arg(short, long, default_value = "pareto.json")]
        output: PathBuf,

        /// Cumulative percentage threshold (0-100)
        #[arg(long, default_value = "80")]
        threshold: f64,

        /// Collapse categories beyond this rank into "Other"
        #[arg(long)]
        top_n: Option<usize>,

        /// Split bars into vital/trivial series at the threshold crossing
        #[arg(long)]
        vital: bool,

        /// Print the statistics table to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Analyze {
            input,
            output,
            threshold,
            top_n,
            vital,
            summary,
        } => {
            let options = PanelOptions {
                threshold_value: threshold,
                enable_top_n: top_n.is_some(),
                top_n_count: top_n.unwrap_or(PanelOptions::default().top_n_count),
                enable_vital_highlight: vital,
                ..Default::default()
            };

            let args = AnalyzeArgs {
                input,
                output,
                options,
                print_summary: summary,
            };

            validate_args(&args)?;
            execute_analyze(args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Validate a report JSON file
fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Generated: {}", report.generated_at);
    println!("  Categories: {}", report.category_count);
    println!("  Total: {}", report.total);
    println!("  Columns: {}", report.columns.width());

    Ok(())
}

/// Display schema information
fn display_schema(show_details: bool) {
    println!("Pareto Panel Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string            - Schema version (e.g., '1.0.0')");
        println!("  generated_at: string       - RFC 3339 timestamp");
        println!("  total: number              - Grand total across categories");
        println!("  category_count: number     - Ranked category count");
        println!("  series: object             - Canonical Pareto series");
        println!("    categories: string[]     - Labels, value-descending");
        println!("    values: number[]         - Totals, same order");
        println!("    cumulative_percent: number[] - Running percentage");
        println!("    total: number            - Grand total");
        println!("  split: object?             - Vital/trivial partition");
        println!("    vital_values: (number|null)[]");
        println!("    trivial_values: (number|null)[]");
        println!("    crossing_index: number?  - First rank at the threshold");
        println!("  columns: object            - Aligned chart columns");
        println!("  statistics: array          - Statistics table rows");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
fn display_version() {
    println!("Pareto Panel v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Pareto analysis pipeline for dashboard panels.");
}
