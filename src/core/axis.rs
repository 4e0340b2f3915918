use serde::{Deserialize, Serialize};

use crate::core::data::BarData;
use crate::core::data_set::AxisDependency;
use crate::error::{ChartError, ChartResult};

/// Derived `{min, max}` extent of one axis, in data units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    min: f64,
    max: f64,
}

impl AxisRange {
    /// Builds a validated range; `min` must not exceed `max`.
    pub fn new(min: f64, max: f64) -> ChartResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ChartError::InvalidData(
                "axis range must be finite".to_owned(),
            ));
        }
        if min > max {
            return Err(ChartError::InvalidData(
                "axis range min must be <= max".to_owned(),
            ));
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Tuning controls for Y-axis range derivation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisTuning {
    /// Extra head-room above the data maximum, as a ratio of the span.
    pub top_space_ratio: f64,
    /// Extra foot-room below the data minimum, as a ratio of the span.
    pub bottom_space_ratio: f64,
    /// A flat data domain is widened symmetrically to at least this span
    /// before padding is applied.
    pub min_span_absolute: f64,
}

impl Default for AxisTuning {
    fn default() -> Self {
        Self {
            top_space_ratio: 0.10,
            bottom_space_ratio: 0.10,
            min_span_absolute: 0.000_001,
        }
    }
}

impl AxisTuning {
    /// No-padding tuning; the derived range equals the data extrema exactly
    /// (flat domains still widen to `min_span_absolute`).
    #[must_use]
    pub fn tight() -> Self {
        Self {
            top_space_ratio: 0.0,
            bottom_space_ratio: 0.0,
            ..Self::default()
        }
    }

    fn validate(self) -> ChartResult<Self> {
        if !self.top_space_ratio.is_finite()
            || !self.bottom_space_ratio.is_finite()
            || self.top_space_ratio < 0.0
            || self.bottom_space_ratio < 0.0
        {
            return Err(ChartError::InvalidData(
                "axis space ratios must be finite and >= 0".to_owned(),
            ));
        }

        if !self.min_span_absolute.is_finite() || self.min_span_absolute <= 0.0 {
            return Err(ChartError::InvalidData(
                "axis min span must be finite and > 0".to_owned(),
            ));
        }

        Ok(self)
    }
}

/// A flat X domain (single group slot) widens by half a category slot per
/// side so the transform stays invertible.
const FLAT_X_SPAN: f64 = 1.0;

/// Derives the Y range for one axis from the container's cached extrema.
///
/// Only data sets bound to `axis` contribute (with the opposite-axis fallback
/// of [`BarData::y_min`]). Must run after layout: grouping shifts entry
/// positions and, with them, the cached aggregates.
pub fn calculate_y_range(
    data: &BarData,
    axis: AxisDependency,
    tuning: AxisTuning,
) -> ChartResult<AxisRange> {
    let tuning = tuning.validate()?;
    let min = data.y_min(axis);
    let max = data.y_max(axis);
    if !min.is_finite() || !max.is_finite() {
        return Err(ChartError::InvalidData(
            "axis extrema must be finite".to_owned(),
        ));
    }

    let (base_min, base_max) = widen_flat(min, max, tuning.min_span_absolute);
    let span = base_max - base_min;
    AxisRange::new(
        base_min - span * tuning.bottom_space_ratio,
        base_max + span * tuning.top_space_ratio,
    )
}

/// Derives the shared X range from the container's cached extrema.
///
/// With `fit_bars` the range widens by exactly half the shared bar width per
/// side, so boundary bars are never clipped at the domain edge.
pub fn calculate_x_range(data: &BarData, fit_bars: bool) -> ChartResult<AxisRange> {
    let mut min = data.x_min();
    let mut max = data.x_max();
    if !min.is_finite() || !max.is_finite() {
        return Err(ChartError::InvalidData(
            "axis extrema must be finite".to_owned(),
        ));
    }

    if fit_bars {
        let half_bar = data.bar_width() / 2.0;
        min -= half_bar;
        max += half_bar;
    } else if min == max {
        let (widened_min, widened_max) = widen_flat(min, max, FLAT_X_SPAN);
        min = widened_min;
        max = widened_max;
    }

    AxisRange::new(min, max)
}

fn widen_flat(min: f64, max: f64, min_span: f64) -> (f64, f64) {
    if min == max {
        let half = min_span / 2.0;
        (min - half, max + half)
    } else {
        (min, max)
    }
}
