//! Rank category totals into the canonical Pareto series.
//!
//! Sort descending by value, then annotate with running cumulative
//! percentages. The sort is stable: categories with equal totals keep the
//! order in which they were first seen during aggregation.

use crate::pipeline::aggregator::CategoryTotals;
use log::debug;
use serde::{Deserialize, Serialize};

/// Canonical pipeline output: parallel sequences sorted by value descending
///
/// Invariants (upheld by `rank` and preserved by the grouper):
/// - all three sequences have equal length
/// - `cumulative_percent` is non-decreasing and ends at ~100 when `total > 0`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParetoSeries {
    pub categories: Vec<String>,
    pub values: Vec<f64>,
    pub cumulative_percent: Vec<f64>,
    pub total: f64,
}

impl ParetoSeries {
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Rank totals into a Pareto series
///
/// **Public** - second stage of the pipeline
///
/// Never fails; the aggregator already filtered out the empty case.
pub fn rank(totals: CategoryTotals) -> ParetoSeries {
    let mut entries = totals.into_entries();

    // Vec::sort_by is stable, so equal values keep first-seen order
    entries.sort_by(|a, b| b.1.total_cmp(&a.1));

    let (categories, values): (Vec<String>, Vec<f64>) = entries.into_iter().unzip();
    let total: f64 = values.iter().sum();
    let cumulative_percent = cumulative_percentages(&values, total);

    debug!("Ranked {} categories, total {}", categories.len(), total);

    ParetoSeries {
        categories,
        values,
        cumulative_percent,
        total,
    }
}

/// Running cumulative percentages against `total`.
///
/// A zero total yields all zeros rather than dividing by zero; shared with
/// the grouper, which recomputes against the original grand total.
pub(crate) fn cumulative_percentages(values: &[f64], total: f64) -> Vec<f64> {
    let mut running = 0.0;
    values
        .iter()
        .map(|v| {
            running += v;
            if total > 0.0 {
                (running / total) * 100.0
            } else {
                0.0
            }
        })
        .collect()
}
