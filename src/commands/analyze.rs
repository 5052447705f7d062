//! The `analyze` command: load frames, run the pipeline, write the report.

use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::path::PathBuf;

use pareto_panel::frame::load_frames;
use pareto_panel::output::{render_table, write_report, Report};
use pareto_panel::pipeline::analyze;
use pareto_panel::utils::config::PanelOptions;

/// Arguments for the analyze command
#[derive(Debug)]
pub struct AnalyzeArgs {
    /// Path to the JSON frame-set file
    pub input: PathBuf,

    /// Path for the JSON report
    pub output: PathBuf,

    /// Pipeline options (threshold, Top-N, highlighting)
    pub options: PanelOptions,

    /// Print the statistics table to stdout
    pub print_summary: bool,
}

/// Validate arguments before doing any work
///
/// **Public** - called from main before execute_analyze
pub fn validate_args(args: &AnalyzeArgs) -> Result<()> {
    if !args.input.exists() {
        bail!("Input file does not exist: {}", args.input.display());
    }
    args.options
        .validate()
        .context("Invalid pipeline options")?;
    Ok(())
}

/// Execute the analyze command
///
/// **Public** - main entry point for the analyze flow
pub fn execute_analyze(args: AnalyzeArgs) -> Result<()> {
    debug!("Analyze args: {:?}", args);

    let frames = load_frames(&args.input)
        .with_context(|| format!("Failed to load frames from {}", args.input.display()))?;
    info!("Loaded {} frames", frames.len());

    let analysis = match analyze(&frames, &args.options)? {
        Some(analysis) => analysis,
        None => {
            // The host shows the same fallback in place of the chart
            println!("No data: the input needs a string (label) field to chart.");
            return Ok(());
        }
    };

    info!(
        "Pipeline produced {} categories, total {}",
        analysis.series.len(),
        analysis.series.total
    );

    let report = Report::from_analysis(&analysis);
    write_report(&report, &args.output)
        .with_context(|| format!("Failed to write report to {}", args.output.display()))?;

    if args.print_summary {
        println!("\nPareto analysis ({} categories, total {}):\n", report.category_count, report.total);
        print!("{}", render_table(&report.statistics));
        if let Some(split) = &report.split {
            match split.crossing_index {
                Some(i) => println!(
                    "\nVital few: {} categories reach {}% of the total.",
                    i + 1,
                    args.options.threshold_value
                ),
                None => println!("\nThreshold never reached; all categories trivial."),
            }
        }
    }

    println!("Report written to {}", args.output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_args_missing_input() {
        let args = AnalyzeArgs {
            input: PathBuf::from("/nonexistent/frames.json"),
            output: PathBuf::from("report.json"),
            options: PanelOptions::default(),
            print_summary: false,
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_bad_options() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        let args = AnalyzeArgs {
            input: temp.path().to_path_buf(),
            output: PathBuf::from("report.json"),
            options: PanelOptions {
                threshold_value: -1.0,
                ..Default::default()
            },
            print_summary: false,
        };
        assert!(validate_args(&args).is_err());
    }
}
