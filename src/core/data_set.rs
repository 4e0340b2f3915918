use serde::{Deserialize, Serialize};

use crate::core::entry::BarEntry;
use crate::error::{ChartError, ChartResult};

/// Which of the two independent Y axes a data set renders against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AxisDependency {
    #[default]
    Left,
    Right,
}

impl AxisDependency {
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// An ordered, non-empty collection of bar entries sharing one axis affinity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarDataSet {
    label: String,
    axis_dependency: AxisDependency,
    entries: Vec<BarEntry>,
    y_min: f64,
    y_max: f64,
    x_min: f64,
    x_max: f64,
    stack_size: usize,
}

impl BarDataSet {
    /// Builds a validated data set bound to the left axis.
    pub fn new(label: impl Into<String>, entries: Vec<BarEntry>) -> ChartResult<Self> {
        Self::with_axis(label, entries, AxisDependency::Left)
    }

    /// Builds a validated data set bound to the given axis.
    pub fn with_axis(
        label: impl Into<String>,
        entries: Vec<BarEntry>,
        axis_dependency: AxisDependency,
    ) -> ChartResult<Self> {
        if entries.is_empty() {
            return Err(ChartError::InvalidData(
                "bar data set requires at least one entry".to_owned(),
            ));
        }

        let mut set = Self {
            label: label.into(),
            axis_dependency,
            entries,
            y_min: 0.0,
            y_max: 0.0,
            x_min: 0.0,
            x_max: 0.0,
            stack_size: 1,
        };
        set.calc_min_max();
        Ok(set)
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn axis_dependency(&self) -> AxisDependency {
        self.axis_dependency
    }

    pub fn set_axis_dependency(&mut self, axis_dependency: AxisDependency) {
        self.axis_dependency = axis_dependency;
    }

    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn entries(&self) -> &[BarEntry] {
        &self.entries
    }

    #[must_use]
    pub fn entry(&self, index: usize) -> Option<&BarEntry> {
        self.entries.get(index)
    }

    /// Maximum stack depth across entries; 1 for plain bar sets.
    #[must_use]
    pub fn stack_size(&self) -> usize {
        self.stack_size
    }

    #[must_use]
    pub fn is_stacked(&self) -> bool {
        self.stack_size > 1
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    /// Tests whether an equal-valued entry is part of this set.
    #[must_use]
    pub fn contains(&self, entry: &BarEntry) -> bool {
        self.entries.iter().any(|candidate| candidate == entry)
    }

    /// Returns the entry closest to the given x-position, with its index.
    #[must_use]
    pub fn entry_nearest_to_x(&self, x: f64) -> Option<(usize, &BarEntry)> {
        self.entries
            .iter()
            .enumerate()
            .min_by(|(_, lhs), (_, rhs)| {
                (lhs.x() - x).abs().total_cmp(&(rhs.x() - x).abs())
            })
    }

    /// Overwrites one entry's layout-assigned x-position.
    ///
    /// The caller is responsible for re-running [`Self::calc_min_max`] once
    /// the whole layout pass is done.
    pub(crate) fn set_entry_x(&mut self, index: usize, x: f64) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.set_x(x);
        }
    }

    /// Recomputes cached aggregates from the current entries.
    ///
    /// Stacked entries contribute their full stacked envelope: `-negative_sum`
    /// as the minimum candidate and `positive_sum` as the maximum candidate.
    pub(crate) fn calc_min_max(&mut self) {
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut stack_size = 1;

        for entry in &self.entries {
            x_min = x_min.min(entry.x());
            x_max = x_max.max(entry.x());

            if entry.is_stacked() {
                y_min = y_min.min(-entry.negative_sum());
                y_max = y_max.max(entry.positive_sum());
                stack_size = stack_size.max(entry.stack_values().len());
            } else {
                y_min = y_min.min(entry.y());
                y_max = y_max.max(entry.y());
            }
        }

        self.y_min = y_min;
        self.y_max = y_max;
        self.x_min = x_min;
        self.x_max = x_max;
        self.stack_size = stack_size;
    }
}
