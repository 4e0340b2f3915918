use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::decimal_to_f64;
use crate::error::{ChartError, ChartResult};

/// Closed-open `[from, to)` span one stack segment occupies along the Y axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StackRange {
    pub from: f64,
    pub to: f64,
}

impl StackRange {
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value > self.from && value <= self.to
    }
}

/// A single bar value: a logical x-position plus either one y-value or an
/// ordered stack of y-values.
///
/// The x-position is the only mutable part of an entry; the layout engine
/// overwrites it when bars are grouped. For stacked entries `y` is the signed
/// sum of the stack and per-segment spans are precomputed for segment
/// hit-testing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarEntry {
    x: f64,
    y: f64,
    #[serde(default)]
    stack: Vec<f64>,
    #[serde(default)]
    ranges: Vec<StackRange>,
    #[serde(default)]
    positive_sum: f64,
    #[serde(default)]
    negative_sum: f64,
}

impl BarEntry {
    /// Builds a validated single-value entry.
    pub fn new(x: f64, y: f64) -> ChartResult<Self> {
        if !x.is_finite() || !y.is_finite() {
            return Err(ChartError::InvalidData(
                "bar entry coordinates must be finite".to_owned(),
            ));
        }

        Ok(Self {
            x,
            y,
            stack: Vec::new(),
            ranges: Vec::new(),
            positive_sum: y.max(0.0),
            negative_sum: (-y).max(0.0),
        })
    }

    /// Builds a validated stacked entry from the ordered segment values.
    ///
    /// The scalar y-value becomes the signed sum of all segments.
    pub fn stacked(x: f64, values: Vec<f64>) -> ChartResult<Self> {
        if !x.is_finite() {
            return Err(ChartError::InvalidData(
                "bar entry coordinates must be finite".to_owned(),
            ));
        }
        if values.is_empty() {
            return Err(ChartError::InvalidData(
                "stacked bar entry requires at least one value".to_owned(),
            ));
        }
        if values.iter().any(|value| !value.is_finite()) {
            return Err(ChartError::InvalidData(
                "stacked bar values must be finite".to_owned(),
            ));
        }

        let positive_sum: f64 = values.iter().filter(|v| **v >= 0.0).sum();
        let negative_sum: f64 = values.iter().filter(|v| **v < 0.0).map(|v| -v).sum();
        let ranges = calc_stack_ranges(&values, negative_sum);

        Ok(Self {
            x,
            y: positive_sum - negative_sum,
            stack: values,
            ranges,
            positive_sum,
            negative_sum,
        })
    }

    /// Builds a single-value entry from an exact decimal value.
    pub fn from_decimal(x: f64, y: Decimal) -> ChartResult<Self> {
        Self::new(x, decimal_to_f64(y, "bar value")?)
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Overwrites the layout-assigned x-position.
    pub(crate) fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn is_stacked(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Ordered stack segment values; empty for single-value entries.
    #[must_use]
    pub fn stack_values(&self) -> &[f64] {
        &self.stack
    }

    #[must_use]
    pub fn stack_size(&self) -> usize {
        self.stack.len().max(1)
    }

    /// Per-segment Y spans; empty for single-value entries.
    #[must_use]
    pub fn stack_ranges(&self) -> &[StackRange] {
        &self.ranges
    }

    /// Sum of all positive segment values (or `max(y, 0)` when unstacked).
    #[must_use]
    pub fn positive_sum(&self) -> f64 {
        self.positive_sum
    }

    /// Absolute sum of all negative segment values (or `max(-y, 0)` when unstacked).
    #[must_use]
    pub fn negative_sum(&self) -> f64 {
        self.negative_sum
    }

    /// Resolves which stack segment a data-space y-value falls into.
    ///
    /// Values outside the stacked span clamp to the first/last segment, so a
    /// touch slightly above or below a bar still selects its nearest segment.
    /// Returns `None` for single-value entries.
    #[must_use]
    pub fn stack_index_for_value(&self, value: f64) -> Option<usize> {
        if self.ranges.is_empty() {
            return None;
        }

        if let Some(index) = self.ranges.iter().position(|range| range.contains(value)) {
            return Some(index);
        }

        let last = self.ranges.len() - 1;
        Some(if value > self.ranges[last].to { last } else { 0 })
    }
}

/// Computes the Y span each stack segment occupies.
///
/// Negative segments accumulate upward from `-negative_sum` toward zero,
/// positive segments accumulate upward from zero, preserving input order
/// within each sign class.
fn calc_stack_ranges(values: &[f64], negative_sum: f64) -> Vec<StackRange> {
    let mut ranges = Vec::with_capacity(values.len());
    let mut neg_remain = -negative_sum;
    let mut pos_remain = 0.0;

    for value in values {
        if *value < 0.0 {
            ranges.push(StackRange {
                from: neg_remain,
                to: neg_remain - value,
            });
            neg_remain -= value;
        } else {
            ranges.push(StackRange {
                from: pos_remain,
                to: pos_remain + value,
            });
            pos_remain += value;
        }
    }

    ranges
}
