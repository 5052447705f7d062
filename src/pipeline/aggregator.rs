//! Aggregate frame rows into per-category totals.
//!
//! Two modes, decided once for the whole frame set: if any frame carries both
//! a label field and a numeric field, only such frames contribute, summing
//! the numeric value per label. Only when no frame qualifies do we fall back
//! to raw occurrence counting over label-only frames. Mixing the two modes
//! in one run is never supported.

use crate::frame::{Frame, FrameMode};
use log::debug;
use std::collections::HashMap;

/// Per-category totals, preserving first-insertion order.
///
/// The ranker breaks value ties by first-seen order, so a plain `HashMap`
/// is not enough; entries keep the order in which their keys first appeared.
#[derive(Debug, Default)]
pub struct CategoryTotals {
    index: HashMap<String, usize>,
    entries: Vec<(String, f64)>,
}

impl CategoryTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to the total for `label`, inserting on first sight
    pub fn add(&mut self, label: &str, amount: f64) {
        match self.index.get(label) {
            Some(&i) => self.entries[i].1 += amount,
            None => {
                self.index.insert(label.to_string(), self.entries.len());
                self.entries.push((label.to_string(), amount));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.index.get(label).map(|&i| self.entries[i].1)
    }

    /// Consume into (label, total) pairs in first-insertion order
    pub fn into_entries(self) -> Vec<(String, f64)> {
        self.entries
    }
}

/// Aggregate a frame set into category totals
///
/// **Public** - first stage of the pipeline
///
/// # Returns
/// `None` when no frame supplies a usable label field in either mode. That
/// is a valid "nothing to chart" outcome, not an error; the caller renders
/// a fallback display.
pub fn aggregate(frames: &[Frame]) -> Option<CategoryTotals> {
    // Phase one: classify every frame up front so the mode decision is
    // global, not per-row.
    let modes: Vec<FrameMode> = frames.iter().map(Frame::mode).collect();
    let has_aggregated = modes
        .iter()
        .any(|m| matches!(m, FrameMode::Aggregated { .. }));

    let mut totals = CategoryTotals::new();

    if has_aggregated {
        debug!("Aggregated mode: summing label/value pairs");
        for mode in &modes {
            if let FrameMode::Aggregated { labels, values } = mode {
                let rows = labels.len().min(values.len());
                for i in 0..rows {
                    totals.add(&labels[i], values[i]);
                }
            }
        }
    } else {
        debug!("Raw mode: counting label occurrences");
        for mode in &modes {
            if let FrameMode::RawLabels { labels } = mode {
                for label in *labels {
                    totals.add(label, 1.0);
                }
            }
        }
    }

    if totals.is_empty() {
        debug!("No usable label data in {} frames", frames.len());
        return None;
    }

    debug!("Aggregated {} categories", totals.len());
    Some(totals)
}
