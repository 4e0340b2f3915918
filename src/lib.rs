//! barchart-rs: grouped/stacked bar chart geometry engine.
//!
//! This crate maps abstract bar data onto Cartesian pixel space and back: it
//! derives axis ranges from data extrema, lays bar groups out along the
//! shared category axis, computes per-entry bounding boxes and resolves
//! pixel touch points to data entries. Rendering, input plumbing and styling
//! live in the host; everything here is deterministic geometry that drawing
//! and hit-testing can agree on.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod telemetry;

pub use api::{BarChartEngine, BarChartConfig};
pub use error::{ChartError, ChartResult};
