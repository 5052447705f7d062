//! Reshape the series into the charting surface's aligned-column format.
//!
//! The chart consumes parallel columns: an index column standing in for
//! category position, the bar values (or vital + trivial bars when a split
//! is supplied), and the cumulative percentage line. Pure reshape, no
//! arithmetic.

use crate::pipeline::ranker::ParetoSeries;
use crate::pipeline::splitter::VitalSplit;
use serde::{Deserialize, Serialize};

/// Parallel same-length columns, fixed order `[index, values..., cumulative]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnBlock {
    pub columns: Vec<Vec<Option<f64>>>,
}

impl ColumnBlock {
    /// Number of columns
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows (all columns are the same length)
    pub fn len(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Project a series (and optional split) into aligned columns
///
/// **Public** - final stage of the pipeline
pub fn project(series: &ParetoSeries, split: Option<&VitalSplit>) -> ColumnBlock {
    let index: Vec<Option<f64>> = (0..series.len()).map(|i| Some(i as f64)).collect();
    let cumulative: Vec<Option<f64>> = series.cumulative_percent.iter().map(|&p| Some(p)).collect();

    let columns = match split {
        Some(split) => vec![
            index,
            split.vital_values.clone(),
            split.trivial_values.clone(),
            cumulative,
        ],
        None => vec![
            index,
            series.values.iter().map(|&v| Some(v)).collect(),
            cumulative,
        ],
    };

    ColumnBlock { columns }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> ParetoSeries {
        ParetoSeries {
            categories: vec!["B".to_string(), "A".to_string()],
            values: vec![70.0, 30.0],
            cumulative_percent: vec![70.0, 100.0],
            total: 100.0,
        }
    }

    #[test]
    fn test_project_without_split() {
        let block = project(&series(), None);
        assert_eq!(block.width(), 3);
        assert_eq!(block.len(), 2);
        assert_eq!(block.columns[0], vec![Some(0.0), Some(1.0)]);
        assert_eq!(block.columns[1], vec![Some(70.0), Some(30.0)]);
        assert_eq!(block.columns[2], vec![Some(70.0), Some(100.0)]);
    }

    #[test]
    fn test_project_with_split() {
        let split = VitalSplit {
            vital_values: vec![Some(70.0), None],
            trivial_values: vec![None, Some(30.0)],
            crossing_index: Some(0),
        };
        let block = project(&series(), Some(&split));
        assert_eq!(block.width(), 4);
        assert_eq!(block.columns[1], vec![Some(70.0), None]);
        assert_eq!(block.columns[2], vec![None, Some(30.0)]);
        assert_eq!(block.columns[3], vec![Some(70.0), Some(100.0)]);
    }

    #[test]
    fn test_all_columns_same_length() {
        let block = project(&series(), None);
        for column in &block.columns {
            assert_eq!(column.len(), block.len());
        }
    }
}
