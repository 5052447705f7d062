//! Tabular input model: typed frames and their JSON loader.

pub mod loader;
pub mod schema;

// Re-export main types and functions
pub use loader::load_frames;
pub use schema::{Field, FieldKind, Frame, FrameMode};
