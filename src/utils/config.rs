//! Configuration and constants for the pipeline.

use serde::{Deserialize, Serialize};

use crate::utils::error::ConfigError;

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Default cumulative-percentage threshold (the 80/20 rule)
pub const DEFAULT_THRESHOLD: f64 = 80.0;

/// Default number of categories kept by Top-N grouping
pub const DEFAULT_TOP_N: usize = 10;

/// Label of the synthetic bucket that collects collapsed categories
pub const OTHER_LABEL: &str = "Other";

// Kind-tag spellings accepted in frame files (different hosts export
// different names for the same field type)
pub const LABEL_KIND_NAMES: &[&str] = &["label", "string", "category", "str"];
pub const NUMERIC_KIND_NAMES: &[&str] = &["numeric", "number", "value", "float", "int"];

/// Panel options as exposed by the visualization host.
///
/// Only `threshold_value`, `enable_top_n` + `top_n_count` and
/// `enable_vital_highlight` are interpreted by the pipeline; the display
/// toggles are passed through untouched to the rendering layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PanelOptions {
    /// Show the threshold line overlay on the chart
    pub show_threshold_line: bool,

    /// Cumulative percentage threshold (e.g. 80 for the 80/20 rule)
    pub threshold_value: f64,

    /// Collapse low-ranked categories into an "Other" bucket
    pub enable_top_n: bool,

    /// Number of categories to keep when Top-N grouping is enabled
    pub top_n_count: usize,

    /// Split bars into vital/trivial series at the threshold crossing
    pub enable_vital_highlight: bool,

    /// Color of the cumulative line; empty means theme default
    pub cumulative_line_color: String,

    /// Width of the cumulative line in pixels
    pub cumulative_line_width: u32,

    /// Show point markers on the cumulative line
    pub show_cumulative_points: bool,

    /// Show the statistics table below the chart
    pub show_statistics_table: bool,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            show_threshold_line: true,
            threshold_value: DEFAULT_THRESHOLD,
            enable_top_n: false,
            top_n_count: DEFAULT_TOP_N,
            enable_vital_highlight: false,
            cumulative_line_color: String::new(),
            cumulative_line_width: 2,
            show_cumulative_points: true,
            show_statistics_table: true,
        }
    }
}

impl PanelOptions {
    /// Check the option values the pipeline interprets.
    ///
    /// Applies the same range rules the grouper and splitter apply, so a
    /// caller can reject a bad option object before running anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.enable_top_n && self.top_n_count < 1 {
            return Err(ConfigError::InvalidTopN(self.top_n_count));
        }
        if !(0.0..=100.0).contains(&self.threshold_value) {
            return Err(ConfigError::InvalidThreshold(self.threshold_value));
        }
        Ok(())
    }
}
