//! Frame schema definitions for tabular input.
//!
//! A frame is one table handed to us by the visualization host: an ordered
//! list of typed fields, each carrying a same-length value sequence. Field
//! kinds form a closed set; classification happens once per frame, never
//! per row.

use serde::{Deserialize, Serialize};

/// Semantic kind of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// String-valued, names the category being counted
    Label,
    /// Number-valued, carries pre-aggregated totals
    Numeric,
    /// Anything else (timestamps, booleans, ...) — ignored by the pipeline
    Other,
}

/// A single typed field within a frame
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Field {
    Label { name: String, values: Vec<String> },
    Numeric { name: String, values: Vec<f64> },
    Other { name: String, len: usize },
}

impl Field {
    pub fn label(name: impl Into<String>, values: Vec<String>) -> Self {
        Field::Label {
            name: name.into(),
            values,
        }
    }

    pub fn numeric(name: impl Into<String>, values: Vec<f64>) -> Self {
        Field::Numeric {
            name: name.into(),
            values,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Field::Label { name, .. } => name,
            Field::Numeric { name, .. } => name,
            Field::Other { name, .. } => name,
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Field::Label { .. } => FieldKind::Label,
            Field::Numeric { .. } => FieldKind::Numeric,
            Field::Other { .. } => FieldKind::Other,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Field::Label { values, .. } => values.len(),
            Field::Numeric { values, .. } => values.len(),
            Field::Other { len, .. } => *len,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One input table: an ordered sequence of typed fields
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Frame {
    /// Display name from the host, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub fields: Vec<Field>,
}

/// How a frame participates in aggregation, decided once per frame.
///
/// A frame with both a label field and a numeric field is aggregated-capable
/// (the first field of each kind is used, further ones are ignored). A frame
/// with only a label field can serve raw occurrence counting. Everything
/// else contributes nothing.
#[derive(Debug)]
pub enum FrameMode<'a> {
    Aggregated {
        labels: &'a [String],
        values: &'a [f64],
    },
    RawLabels {
        labels: &'a [String],
    },
    Unusable,
}

impl Frame {
    pub fn new(name: Option<String>, fields: Vec<Field>) -> Self {
        Self { name, fields }
    }

    /// First label-kind field's values, if any
    fn first_labels(&self) -> Option<&[String]> {
        self.fields.iter().find_map(|f| match f {
            Field::Label { values, .. } => Some(values.as_slice()),
            _ => None,
        })
    }

    /// First numeric-kind field's values, if any
    fn first_numbers(&self) -> Option<&[f64]> {
        self.fields.iter().find_map(|f| match f {
            Field::Numeric { values, .. } => Some(values.as_slice()),
            _ => None,
        })
    }

    /// Classify this frame for the aggregator.
    ///
    /// **Public** - the mode decision point for the whole pipeline
    pub fn mode(&self) -> FrameMode<'_> {
        match (self.first_labels(), self.first_numbers()) {
            (Some(labels), Some(values)) => FrameMode::Aggregated { labels, values },
            (Some(labels), None) => FrameMode::RawLabels { labels },
            _ => FrameMode::Unusable,
        }
    }
}
