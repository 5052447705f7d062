//! Statistics-table derivation for the tabular view.
//!
//! The host's statistics table shows, per ranked category, the frequency,
//! its share of the total, and running cumulative count/percentage. The
//! derivation lives here so the table and the CLI summary agree.

use crate::pipeline::ParetoSeries;
use serde::{Deserialize, Serialize};

/// One row of the statistics table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatRow {
    pub category: String,

    /// The category's total (count or summed value)
    pub frequency: f64,

    /// Share of the grand total, in percent
    pub pct_of_total: f64,

    /// Running sum of frequencies through this row
    pub cumulative_count: f64,

    pub cumulative_percent: f64,
}

/// Derive statistics rows from a ranked series
///
/// **Public** - feeds the table view and the CLI summary
pub fn statistics_rows(series: &ParetoSeries) -> Vec<StatRow> {
    let mut running = 0.0;
    series
        .categories
        .iter()
        .zip(&series.values)
        .zip(&series.cumulative_percent)
        .map(|((category, &frequency), &cumulative_percent)| {
            running += frequency;
            StatRow {
                category: category.clone(),
                frequency,
                pct_of_total: if series.total > 0.0 {
                    (frequency / series.total) * 100.0
                } else {
                    0.0
                },
                cumulative_count: running,
                cumulative_percent,
            }
        })
        .collect()
}

/// Render statistics rows as a plain-text table
///
/// **Public** - used by the CLI `--summary` output
pub fn render_table(rows: &[StatRow]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<24} {:>12} {:>10} {:>12} {:>12}\n",
        "Category", "Frequency", "% Total", "Cum. Count", "Cum. %"
    ));
    for row in rows {
        out.push_str(&format!(
            "{:<24} {:>12} {:>9.1}% {:>12} {:>11.1}%\n",
            row.category, row.frequency, row.pct_of_total, row.cumulative_count, row.cumulative_percent
        ));
    }
    out
}
