pub mod axis;
pub mod bounds;
pub mod data;
pub mod data_set;
pub mod entry;
pub mod layout;
pub mod primitives;
pub mod projection;
pub mod transform;
pub mod types;

pub use axis::{AxisRange, AxisTuning, calculate_x_range, calculate_y_range};
pub use bounds::bar_bounds_value;
pub use data::BarData;
pub use data_set::{AxisDependency, BarDataSet};
pub use entry::{BarEntry, StackRange};
pub use projection::{BarRect, project_bar_rects};
pub use transform::Transformer;
pub use types::{DataPoint, Rect, Viewport};
