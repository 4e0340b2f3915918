use tracing::{debug, warn};

use crate::core::{
    AxisDependency, AxisRange, BarData, BarRect, Transformer, Viewport, calculate_x_range,
    calculate_y_range, project_bar_rects,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::Highlight;

use super::BarChartConfig;

/// Orchestrates the bar chart geometry pipeline: bound data → layout → axis
/// ranges → per-axis transformers, plus the bounds and highlight queries
/// built on top of them.
///
/// All recomputation is synchronous; every query issued after a mutating call
/// returns observes the new state. `&mut self` on the mutating methods makes
/// the host's serialization duty compiler-enforced.
pub struct BarChartEngine {
    pub(super) config: BarChartConfig,
    pub(super) data: Option<BarData>,
    pub(super) x_range: Option<AxisRange>,
    pub(super) left_y_range: Option<AxisRange>,
    pub(super) right_y_range: Option<AxisRange>,
    pub(super) left_transformer: Option<Transformer>,
    pub(super) right_transformer: Option<Transformer>,
    pub(super) highlight: Option<Highlight>,
}

impl BarChartEngine {
    /// Creates an engine with no data bound yet.
    pub fn new(config: BarChartConfig) -> ChartResult<Self> {
        if !config.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: config.viewport.width,
                height: config.viewport.height,
            });
        }

        Ok(Self {
            config,
            data: None,
            x_range: None,
            left_y_range: None,
            right_y_range: None,
            left_transformer: None,
            right_transformer: None,
            highlight: None,
        })
    }

    /// Binds a data snapshot and runs the full recomputation against it.
    pub fn set_data(&mut self, data: BarData) -> ChartResult<()> {
        debug!(
            data_sets = data.data_set_count(),
            bar_width = data.bar_width(),
            "bind bar data"
        );
        self.data = Some(data);
        self.highlight = None;
        self.notify_data_changed()
    }

    /// Unbinds the data; subsequent geometry queries report "no data".
    pub fn clear_data(&mut self) {
        self.data = None;
        self.x_range = None;
        self.left_y_range = None;
        self.right_y_range = None;
        self.left_transformer = None;
        self.right_transformer = None;
        self.highlight = None;
    }

    #[must_use]
    pub fn data(&self) -> Option<&BarData> {
        self.data.as_ref()
    }

    #[must_use]
    pub fn config(&self) -> BarChartConfig {
        self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    /// Replaces the target viewport and rebuilds the transformers.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.config.viewport = viewport;
        self.notify_data_changed()
    }

    /// Recomputes ranges and transformers after the bound data was mutated.
    ///
    /// Runs synchronously; when it returns, every transform, bounds and
    /// highlight query observes the new state. Without bound data this is a
    /// warn-logged no-op.
    pub fn notify_data_changed(&mut self) -> ChartResult<()> {
        let Some(data) = self.data.as_mut() else {
            warn!("data changed notification with no data bound");
            return Ok(());
        };

        if self.config.auto_scale_min_max {
            data.calc_min_max();
        }

        let x_range = calculate_x_range(data, self.config.fit_bars)?;
        let left_y_range =
            calculate_y_range(data, AxisDependency::Left, self.config.y_axis_tuning)?;
        let right_y_range =
            calculate_y_range(data, AxisDependency::Right, self.config.y_axis_tuning)?;

        // Build both transformers before publishing anything, so a failure
        // leaves the previous geometry intact rather than half-replaced.
        let left_transformer = Transformer::new(x_range, left_y_range, self.config.viewport)?;
        let right_transformer = Transformer::new(x_range, right_y_range, self.config.viewport)?;

        self.left_transformer = Some(left_transformer);
        self.right_transformer = Some(right_transformer);
        self.x_range = Some(x_range);
        self.left_y_range = Some(left_y_range);
        self.right_y_range = Some(right_y_range);

        debug!(
            x_min = x_range.min(),
            x_max = x_range.max(),
            left_min = left_y_range.min(),
            left_max = left_y_range.max(),
            right_min = right_y_range.min(),
            right_max = right_y_range.max(),
            "axis ranges recomputed"
        );
        Ok(())
    }

    /// Re-positions entries into side-by-side groups and recomputes all
    /// downstream geometry.
    ///
    /// Calling this with no data bound is a precondition violation and fails
    /// hard with [`ChartError::NoData`].
    pub fn group_bars(&mut self, from_x: f64, group_space: f64, bar_space: f64) -> ChartResult<()> {
        let Some(data) = self.data.as_mut() else {
            return Err(ChartError::NoData);
        };
        data.group_bars(from_x, group_space, bar_space)?;
        self.notify_data_changed()
    }

    /// Sets the shared bar width and recomputes the dependent geometry.
    pub fn set_bar_width(&mut self, bar_width: f64) -> ChartResult<()> {
        let Some(data) = self.data.as_mut() else {
            return Err(ChartError::NoData);
        };
        data.set_bar_width(bar_width)?;
        self.notify_data_changed()
    }

    /// The transformer serving data sets bound to `axis`.
    pub fn transformer(&self, axis: AxisDependency) -> ChartResult<&Transformer> {
        let transformer = match axis {
            AxisDependency::Left => self.left_transformer.as_ref(),
            AxisDependency::Right => self.right_transformer.as_ref(),
        };
        transformer.ok_or(ChartError::NoData)
    }

    #[must_use]
    pub fn x_range(&self) -> Option<AxisRange> {
        self.x_range
    }

    #[must_use]
    pub fn y_range(&self, axis: AxisDependency) -> Option<AxisRange> {
        match axis {
            AxisDependency::Left => self.left_y_range,
            AxisDependency::Right => self.right_y_range,
        }
    }

    #[must_use]
    pub fn is_fit_bars_enabled(&self) -> bool {
        self.config.fit_bars
    }

    /// Reserves half a bar width of X range on each side of the domain.
    pub fn set_fit_bars(&mut self, enabled: bool) -> ChartResult<()> {
        self.config.fit_bars = enabled;
        self.notify_data_changed()
    }

    #[must_use]
    pub fn is_auto_scale_min_max_enabled(&self) -> bool {
        self.config.auto_scale_min_max
    }

    pub fn set_auto_scale_min_max(&mut self, enabled: bool) -> ChartResult<()> {
        self.config.auto_scale_min_max = enabled;
        self.notify_data_changed()
    }

    #[must_use]
    pub fn is_highlight_full_bar_enabled(&self) -> bool {
        self.config.highlight_full_bar
    }

    /// Full-bar mode selects whole stacked bars; otherwise the touched
    /// segment is resolved.
    pub fn set_highlight_full_bar(&mut self, enabled: bool) {
        self.config.highlight_full_bar = enabled;
    }

    /// Projects every bound entry to its pixel-space rect for drawing.
    pub fn project_bar_rects(&self) -> ChartResult<Vec<BarRect>> {
        let Some(data) = self.data.as_ref() else {
            return Err(ChartError::NoData);
        };
        let left = self.transformer(AxisDependency::Left)?;
        let right = self.transformer(AxisDependency::Right)?;
        Ok(project_bar_rects(data, *left, *right))
    }
}
