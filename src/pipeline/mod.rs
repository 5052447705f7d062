//! The Pareto transformation pipeline.
//!
//! Pure, stage-by-stage transform over immutable input:
//! aggregate -> rank -> (optional) group -> (optional) split -> project.
//! Every invocation starts from scratch; nothing carries over between
//! calls, so a host may re-run it on every data or option change.

pub mod aggregator;
pub mod grouper;
pub mod projector;
pub mod ranker;
pub mod splitter;

// Re-export main types and functions
pub use aggregator::{aggregate, CategoryTotals};
pub use grouper::group_top_n;
pub use projector::{project, ColumnBlock};
pub use ranker::{rank, ParetoSeries};
pub use splitter::{crossing_index, split_vital_trivial, VitalSplit};

use crate::frame::Frame;
use crate::utils::config::PanelOptions;
use crate::utils::error::ConfigError;
use log::debug;

/// Everything the rendering layer needs from one pipeline run
#[derive(Debug, Clone)]
pub struct ParetoAnalysis {
    /// The ranked series, grouped when Top-N is enabled
    pub series: ParetoSeries,

    /// Vital/trivial partition, present when highlighting is enabled
    pub split: Option<VitalSplit>,

    /// Aligned columns for the chart surface
    pub columns: ColumnBlock,
}

/// Run the full pipeline over a frame set
///
/// **Public** - the host-facing entry point
///
/// # Returns
/// `Ok(None)` when no frame supplies usable label data (the "no data"
/// fallback, not an error).
///
/// # Errors
/// * `ConfigError` - out-of-range Top-N count or threshold
pub fn analyze(
    frames: &[Frame],
    options: &PanelOptions,
) -> Result<Option<ParetoAnalysis>, ConfigError> {
    let totals = match aggregate(frames) {
        Some(totals) => totals,
        None => {
            debug!("Pipeline produced no data");
            return Ok(None);
        }
    };

    let mut series = rank(totals);

    if options.enable_top_n {
        series = group_top_n(series, options.top_n_count)?;
    }

    let split = if options.enable_vital_highlight {
        Some(split_vital_trivial(&series, options.threshold_value)?)
    } else {
        None
    };

    let columns = project(&series, split.as_ref());

    Ok(Some(ParetoAnalysis {
        series,
        split,
        columns,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Field;

    fn aggregated_frame() -> Frame {
        Frame::new(
            None,
            vec![
                Field::label(
                    "category",
                    vec!["A".to_string(), "B".to_string(), "C".to_string()],
                ),
                Field::numeric("value", vec![10.0, 50.0, 40.0]),
            ],
        )
    }

    #[test]
    fn test_analyze_plain() {
        let analysis = analyze(&[aggregated_frame()], &PanelOptions::default())
            .unwrap()
            .unwrap();
        assert_eq!(analysis.series.categories, vec!["B", "C", "A"]);
        assert!(analysis.split.is_none());
        assert_eq!(analysis.columns.width(), 3);
    }

    #[test]
    fn test_analyze_with_top_n_and_highlight() {
        let options = PanelOptions {
            enable_top_n: true,
            top_n_count: 2,
            enable_vital_highlight: true,
            ..Default::default()
        };
        let analysis = analyze(&[aggregated_frame()], &options).unwrap().unwrap();
        assert_eq!(analysis.series.categories, vec!["B", "C", "Other"]);
        assert!(analysis.split.is_some());
        assert_eq!(analysis.columns.width(), 4);
    }

    #[test]
    fn test_analyze_no_data() {
        let frame = Frame::new(None, vec![Field::numeric("value", vec![1.0])]);
        let outcome = analyze(&[frame], &PanelOptions::default()).unwrap();
        assert!(outcome.is_none());
    }

    #[test]
    fn test_analyze_rejects_bad_config() {
        let options = PanelOptions {
            enable_top_n: true,
            top_n_count: 0,
            ..Default::default()
        };
        assert!(analyze(&[aggregated_frame()], &options).is_err());
    }
}
