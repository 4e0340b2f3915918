use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::data_set::{AxisDependency, BarDataSet};
use crate::core::entry::BarEntry;
use crate::core::layout;
use crate::error::{ChartError, ChartResult};

const DEFAULT_BAR_WIDTH: f64 = 0.85;

/// The bound data of a bar chart: all data sets plus the shared bar width.
///
/// Aggregate extrema are cached per axis and recomputed through
/// [`Self::calc_min_max`]; the cached values always envelop the element-wise
/// extrema of the contained data sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarData {
    data_sets: Vec<BarDataSet>,
    label_index: IndexMap<String, usize>,
    bar_width: f64,
    x_min: f64,
    x_max: f64,
    left_y_min: f64,
    left_y_max: f64,
    right_y_min: f64,
    right_y_max: f64,
}

impl BarData {
    /// Builds a validated container over at least one data set.
    ///
    /// Data set labels must be unique; they key the insertion-ordered
    /// label lookup.
    pub fn new(data_sets: Vec<BarDataSet>) -> ChartResult<Self> {
        if data_sets.is_empty() {
            return Err(ChartError::InvalidData(
                "bar data requires at least one data set".to_owned(),
            ));
        }

        let mut label_index = IndexMap::with_capacity(data_sets.len());
        for (index, set) in data_sets.iter().enumerate() {
            if label_index.insert(set.label().to_owned(), index).is_some() {
                return Err(ChartError::InvalidData(format!(
                    "duplicate data set label: {}",
                    set.label()
                )));
            }
        }

        let mut data = Self {
            data_sets,
            label_index,
            bar_width: DEFAULT_BAR_WIDTH,
            x_min: 0.0,
            x_max: 0.0,
            left_y_min: 0.0,
            left_y_max: 0.0,
            right_y_min: 0.0,
            right_y_max: 0.0,
        };
        data.calc_min_max();
        Ok(data)
    }

    #[must_use]
    pub fn bar_width(&self) -> f64 {
        self.bar_width
    }

    /// Sets the bar width shared by every data set, in x-axis units.
    pub fn set_bar_width(&mut self, bar_width: f64) -> ChartResult<()> {
        if !bar_width.is_finite() || bar_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "bar width must be finite and > 0".to_owned(),
            ));
        }
        self.bar_width = bar_width;
        Ok(())
    }

    #[must_use]
    pub fn data_set_count(&self) -> usize {
        self.data_sets.len()
    }

    #[must_use]
    pub fn data_sets(&self) -> &[BarDataSet] {
        &self.data_sets
    }

    #[must_use]
    pub fn data_set(&self, index: usize) -> Option<&BarDataSet> {
        self.data_sets.get(index)
    }

    #[must_use]
    pub fn data_set_by_label(&self, label: &str) -> Option<&BarDataSet> {
        self.label_index
            .get(label)
            .and_then(|index| self.data_sets.get(*index))
    }

    /// Finds the index of the data set containing an equal-valued entry.
    #[must_use]
    pub fn data_set_for_entry(&self, entry: &BarEntry) -> Option<usize> {
        self.data_sets.iter().position(|set| set.contains(entry))
    }

    /// Longest entry count across data sets; the number of group slots a
    /// grouped layout produces.
    #[must_use]
    pub fn max_entry_count(&self) -> usize {
        self.data_sets
            .iter()
            .map(BarDataSet::entry_count)
            .max()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    /// Cached y-minimum over data sets bound to `axis`.
    ///
    /// When no data set renders against `axis`, the opposite axis's extremum
    /// is returned so both axis ranges stay well-defined.
    #[must_use]
    pub fn y_min(&self, axis: AxisDependency) -> f64 {
        let (own, other) = match axis {
            AxisDependency::Left => (self.left_y_min, self.right_y_min),
            AxisDependency::Right => (self.right_y_min, self.left_y_min),
        };
        if own.is_finite() { own } else { other }
    }

    /// Cached y-maximum over data sets bound to `axis`; same fallback rule as
    /// [`Self::y_min`].
    #[must_use]
    pub fn y_max(&self, axis: AxisDependency) -> f64 {
        let (own, other) = match axis {
            AxisDependency::Left => (self.left_y_max, self.right_y_max),
            AxisDependency::Right => (self.right_y_max, self.left_y_max),
        };
        if own.is_finite() { own } else { other }
    }

    /// Total x-axis width one bar group occupies under the given spacing.
    #[must_use]
    pub fn group_width(&self, group_space: f64, bar_space: f64) -> f64 {
        layout::group_width(self.data_sets.len(), self.bar_width, group_space, bar_space)
    }

    /// Re-positions every entry so same-indexed entries across data sets sit
    /// side by side in one group per entry index.
    ///
    /// Previously assigned x-positions are overwritten, so re-running with
    /// identical parameters reproduces identical positions. Cached extrema
    /// are recomputed afterwards.
    pub fn group_bars(&mut self, from_x: f64, group_space: f64, bar_space: f64) -> ChartResult<()> {
        if !from_x.is_finite() {
            return Err(ChartError::InvalidData(
                "group layout origin must be finite".to_owned(),
            ));
        }
        if !group_space.is_finite() || group_space < 0.0 {
            return Err(ChartError::InvalidData(
                "group space must be finite and >= 0".to_owned(),
            ));
        }
        if !bar_space.is_finite() || bar_space < 0.0 {
            return Err(ChartError::InvalidData(
                "bar space must be finite and >= 0".to_owned(),
            ));
        }

        let entry_counts: Vec<usize> = self
            .data_sets
            .iter()
            .map(BarDataSet::entry_count)
            .collect();
        let plan = layout::plan_grouped_positions(
            &entry_counts,
            from_x,
            self.bar_width,
            group_space,
            bar_space,
        );

        for (data_set_index, positions) in plan.iter().enumerate() {
            for (entry_index, x) in positions.iter().enumerate() {
                self.data_sets[data_set_index].set_entry_x(entry_index, *x);
            }
        }

        debug!(
            data_sets = self.data_sets.len(),
            groups = self.max_entry_count(),
            from_x,
            group_space,
            bar_space,
            "grouped bar positions assigned"
        );

        self.calc_min_max();
        Ok(())
    }

    /// Recomputes cached global and per-axis extrema from the data sets.
    pub fn calc_min_max(&mut self) {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut left_y_min = f64::INFINITY;
        let mut left_y_max = f64::NEG_INFINITY;
        let mut right_y_min = f64::INFINITY;
        let mut right_y_max = f64::NEG_INFINITY;

        for set in &mut self.data_sets {
            set.calc_min_max();
            x_min = x_min.min(set.x_min());
            x_max = x_max.max(set.x_max());

            match set.axis_dependency() {
                AxisDependency::Left => {
                    left_y_min = left_y_min.min(set.y_min());
                    left_y_max = left_y_max.max(set.y_max());
                }
                AxisDependency::Right => {
                    right_y_min = right_y_min.min(set.y_min());
                    right_y_max = right_y_max.max(set.y_max());
                }
            }
        }

        self.x_min = x_min;
        self.x_max = x_max;
        self.left_y_min = left_y_min;
        self.left_y_max = left_y_max;
        self.right_y_min = right_y_min;
        self.right_y_max = right_y_max;
    }
}
