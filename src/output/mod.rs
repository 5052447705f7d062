//! Report and statistics output for pipeline results.

pub mod json;
pub mod table;

// Re-export main types and functions
pub use json::{read_report, write_report, Report};
pub use table::{render_table, statistics_rows, StatRow};
