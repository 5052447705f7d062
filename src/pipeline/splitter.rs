//! Partition a ranked series into vital and trivial bars.
//!
//! Per Pareto-analysis convention, categories at or before the threshold
//! crossing are the "vital few" and the rest the "trivial many". The chart
//! layer draws the two as separate bar series, so each index holds the value
//! on exactly one side and an explicit absence on the other.

use crate::pipeline::ranker::ParetoSeries;
use crate::utils::error::ConfigError;
use log::debug;
use serde::{Deserialize, Serialize};

/// The vital/trivial partition of a series' values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalSplit {
    /// Value at indices up to and including the crossing, `None` after
    pub vital_values: Vec<Option<f64>>,

    /// Value at indices after the crossing, `None` before
    pub trivial_values: Vec<Option<f64>>,

    /// First index whose cumulative percent reaches the threshold; `None`
    /// means everything is trivial (threshold never reached)
    pub crossing_index: Option<usize>,
}

/// First index where the cumulative percentage reaches `threshold`.
///
/// The sequence is non-decreasing, so a linear scan for the first match
/// finds the single transition point. Also used by the threshold-line
/// overlay to position its marker.
pub fn crossing_index(series: &ParetoSeries, threshold: f64) -> Option<usize> {
    series
        .cumulative_percent
        .iter()
        .position(|&p| p >= threshold)
}

/// Split a series at the threshold crossing
///
/// **Public** - optional post-pass over the ranked (or grouped) series
///
/// # Errors
/// * `ConfigError::InvalidThreshold` - threshold outside `0..=100`
pub fn split_vital_trivial(
    series: &ParetoSeries,
    threshold: f64,
) -> Result<VitalSplit, ConfigError> {
    if !(0.0..=100.0).contains(&threshold) {
        return Err(ConfigError::InvalidThreshold(threshold));
    }

    let crossing = crossing_index(series, threshold);
    debug!("Threshold {} crosses at index {:?}", threshold, crossing);

    let mut vital_values = Vec::with_capacity(series.len());
    let mut trivial_values = Vec::with_capacity(series.len());

    for (i, &value) in series.values.iter().enumerate() {
        let is_vital = matches!(crossing, Some(c) if i <= c);
        if is_vital {
            vital_values.push(Some(value));
            trivial_values.push(None);
        } else {
            vital_values.push(None);
            trivial_values.push(Some(value));
        }
    }

    Ok(VitalSplit {
        vital_values,
        trivial_values,
        crossing_index: crossing,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f64], cumulative: &[f64]) -> ParetoSeries {
        ParetoSeries {
            categories: values.iter().map(|v| v.to_string()).collect(),
            values: values.to_vec(),
            cumulative_percent: cumulative.to_vec(),
            total: values.iter().sum(),
        }
    }

    #[test]
    fn test_split_at_80() {
        let s = series(&[50.0, 40.0, 10.0], &[50.0, 90.0, 100.0]);
        let split = split_vital_trivial(&s, 80.0).unwrap();

        assert_eq!(split.crossing_index, Some(1));
        assert_eq!(split.vital_values, vec![Some(50.0), Some(40.0), None]);
        assert_eq!(split.trivial_values, vec![None, None, Some(10.0)]);
    }

    #[test]
    fn test_threshold_zero_puts_everything_vital() {
        let s = series(&[3.0, 1.0], &[75.0, 100.0]);
        let split = split_vital_trivial(&s, 0.0).unwrap();
        assert_eq!(split.crossing_index, Some(0));
        // Crossing at index 0 still leaves index 0 itself vital
        assert_eq!(split.vital_values, vec![Some(3.0), None]);
        assert_eq!(split.trivial_values, vec![None, Some(1.0)]);
    }

    #[test]
    fn test_unreachable_threshold_is_all_trivial() {
        // Zero-total series never reaches any positive threshold
        let s = series(&[0.0, 0.0], &[0.0, 0.0]);
        let split = split_vital_trivial(&s, 80.0).unwrap();
        assert_eq!(split.crossing_index, None);
        assert_eq!(split.vital_values, vec![None, None]);
        assert_eq!(split.trivial_values, vec![Some(0.0), Some(0.0)]);
    }

    #[test]
    fn test_exactly_one_side_present() {
        let s = series(&[5.0, 3.0, 2.0], &[50.0, 80.0, 100.0]);
        let split = split_vital_trivial(&s, 80.0).unwrap();
        for i in 0..s.len() {
            let sides = [split.vital_values[i], split.trivial_values[i]];
            assert_eq!(sides.iter().filter(|v| v.is_some()).count(), 1);
            assert_eq!(sides.iter().find_map(|v| *v), Some(s.values[i]));
        }
    }

    #[test]
    fn test_out_of_range_threshold_rejected() {
        let s = series(&[1.0], &[100.0]);
        assert!(matches!(
            split_vital_trivial(&s, 101.0),
            Err(ConfigError::InvalidThreshold(_))
        ));
        assert!(split_vital_trivial(&s, -0.5).is_err());
    }
}
