//! Versioned JSON report writer/reader.
//!
//! The report bundles everything one pipeline run produced: the ranked
//! series, the optional vital/trivial split, the aligned-column projection,
//! and the statistics rows. Schema is versioned to allow future evolution.

use crate::output::table::{statistics_rows, StatRow};
use crate::pipeline::{ColumnBlock, ParetoAnalysis, ParetoSeries, VitalSplit};
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::OutputError;
use chrono::Utc;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Top-level report structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Schema version for compatibility checking
    pub version: String,

    /// RFC 3339 timestamp of when the report was generated
    pub generated_at: String,

    /// Grand total across all categories
    pub total: f64,

    /// Number of ranked categories (after grouping, if any)
    pub category_count: usize,

    pub series: ParetoSeries,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub split: Option<VitalSplit>,

    pub columns: ColumnBlock,

    pub statistics: Vec<StatRow>,
}

impl Report {
    /// Build a report from a pipeline run
    pub fn from_analysis(analysis: &ParetoAnalysis) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            generated_at: Utc::now().to_rfc3339(),
            total: analysis.series.total,
            category_count: analysis.series.len(),
            statistics: statistics_rows(&analysis.series),
            series: analysis.series.clone(),
            split: analysis.split.clone(),
            columns: analysis.columns.clone(),
        }
    }
}

/// Write a report to a JSON file
///
/// **Public** - main entry point for report output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - path cannot be created or is invalid
pub fn write_report(report: &Report, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing report to: {}", output_path.display());

    validate_output_path(output_path)?;

    if let Some(parent) = output_path.parent() {
        if !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, report).map_err(OutputError::SerializationFailed)?;

    info!("Report written ({} categories)", report.category_count);

    Ok(())
}

/// Read a report from a JSON file
///
/// **Public** - useful for validation and testing
pub fn read_report(input_path: impl AsRef<Path>) -> Result<Report, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading report from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let report: Report = serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Report loaded: version {}, {} categories",
        report.version, report.category_count
    );

    Ok(report)
}

/// Validate that output path is writable
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::project;

    fn test_analysis() -> ParetoAnalysis {
        let series = ParetoSeries {
            categories: vec!["B".to_string(), "A".to_string()],
            values: vec![70.0, 30.0],
            cumulative_percent: vec![70.0, 100.0],
            total: 100.0,
        };
        let columns = project(&series, None);
        ParetoAnalysis {
            series,
            split: None,
            columns,
        }
    }

    #[test]
    fn test_report_from_analysis() {
        let report = Report::from_analysis(&test_analysis());
        assert_eq!(report.version, SCHEMA_VERSION);
        assert_eq!(report.total, 100.0);
        assert_eq!(report.category_count, 2);
        assert_eq!(report.statistics.len(), 2);
    }

    #[test]
    fn test_write_and_read_report() {
        let report = Report::from_analysis(&test_analysis());
        let temp_file = tempfile::NamedTempFile::new().unwrap();

        write_report(&report, temp_file.path()).unwrap();
        let loaded = read_report(temp_file.path()).unwrap();

        assert_eq!(loaded.version, report.version);
        assert_eq!(loaded.series, report.series);
        assert_eq!(loaded.columns, report.columns);
    }

    #[test]
    fn test_validate_output_path_empty() {
        assert!(validate_output_path(Path::new("")).is_err());
    }

    #[test]
    fn test_validate_output_path_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(validate_output_path(temp_dir.path()).is_err());
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/dirs/report.json");

        let report = Report::from_analysis(&test_analysis());
        write_report(&report, &nested_path).unwrap();

        assert!(nested_path.exists());
    }
}
