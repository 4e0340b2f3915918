use serde::{Deserialize, Serialize};

use crate::core::{AxisTuning, Viewport};

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarChartConfig {
    pub viewport: Viewport,
    /// Widen the X range by half the bar width on each side so boundary bars
    /// are never clipped.
    #[serde(default)]
    pub fit_bars: bool,
    /// Recompute container extrema from the data on every change
    /// notification instead of reusing the cached values.
    #[serde(default)]
    pub auto_scale_min_max: bool,
    /// Highlight whole stacked bars instead of individual segments.
    #[serde(default)]
    pub highlight_full_bar: bool,
    #[serde(default)]
    pub y_axis_tuning: AxisTuning,
}

impl BarChartConfig {
    /// Creates a minimal config with default range tuning and all modes off.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            fit_bars: false,
            auto_scale_min_max: false,
            highlight_full_bar: false,
            y_axis_tuning: AxisTuning::default(),
        }
    }

    #[must_use]
    pub fn with_fit_bars(mut self, enabled: bool) -> Self {
        self.fit_bars = enabled;
        self
    }

    #[must_use]
    pub fn with_auto_scale_min_max(mut self, enabled: bool) -> Self {
        self.auto_scale_min_max = enabled;
        self
    }

    #[must_use]
    pub fn with_highlight_full_bar(mut self, enabled: bool) -> Self {
        self.highlight_full_bar = enabled;
        self
    }

    #[must_use]
    pub fn with_y_axis_tuning(mut self, tuning: AxisTuning) -> Self {
        self.y_axis_tuning = tuning;
        self
    }
}
