//! Collapse low-ranked categories into an "Other" bucket.

use crate::pipeline::ranker::{cumulative_percentages, ParetoSeries};
use crate::utils::config::OTHER_LABEL;
use crate::utils::error::ConfigError;
use log::debug;

/// Keep the top `top_n` categories and collapse the rest into `"Other"`
///
/// **Public** - optional post-pass over the ranked series
///
/// The bucket always trails, even when its sum exceeds kept entries; it is a
/// remainder, not a rank. Cumulative percentages are recomputed against the
/// ORIGINAL grand total, so grouping never changes `total`.
///
/// # Errors
/// * `ConfigError::InvalidTopN` - `top_n` is zero
pub fn group_top_n(series: ParetoSeries, top_n: usize) -> Result<ParetoSeries, ConfigError> {
    if top_n < 1 {
        return Err(ConfigError::InvalidTopN(top_n));
    }
    if series.len() <= top_n {
        return Ok(series);
    }

    let mut categories: Vec<String> = series.categories[..top_n].to_vec();
    let mut values: Vec<f64> = series.values[..top_n].to_vec();
    let other_sum: f64 = series.values[top_n..].iter().sum();

    debug!(
        "Collapsing {} categories into '{}' (sum {})",
        series.len() - top_n,
        OTHER_LABEL,
        other_sum
    );

    categories.push(OTHER_LABEL.to_string());
    values.push(other_sum);

    let cumulative_percent = cumulative_percentages(&values, series.total);

    Ok(ParetoSeries {
        categories,
        values,
        cumulative_percent,
        total: series.total,
    })
}
