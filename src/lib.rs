//! Pareto Panel
//!
//! Data transformation pipeline for Pareto chart panels: aggregates
//! tabular input into ranked category frequencies with cumulative
//! percentages, optional Top-N grouping, vital/trivial threshold splits,
//! and an aligned-column projection for the charting surface.
//!
//! ## Getting Started
//!
//! ```no_run
//! use pareto_panel::frame::load_frames;
//! use pareto_panel::pipeline::analyze;
//! use pareto_panel::utils::config::PanelOptions;
//!
//! let frames = load_frames("frames.json").unwrap();
//! match analyze(&frames, &PanelOptions::default()).unwrap() {
//!     Some(analysis) => println!("{} categories", analysis.series.len()),
//!     None => println!("Data is missing a string (label) field"),
//! }
//! ```

pub mod frame;
pub mod output;
pub mod pipeline;
pub mod utils;
