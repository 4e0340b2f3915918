use crate::core::entry::BarEntry;
use crate::core::types::Rect;

/// Data-space bounding box of a single bar.
///
/// Bars always span from the zero baseline to the value: `top` is
/// `max(y, 0)` and `bottom` is `min(y, 0)`, which renders positive and
/// negative bars correctly with one rule. Stacked entries use the scalar
/// stack sum as their value.
#[must_use]
pub fn bar_bounds_value(entry: &BarEntry, bar_width: f64) -> Rect {
    let half_width = bar_width / 2.0;
    let y = entry.y();

    Rect::new(
        entry.x() - half_width,
        y.max(0.0),
        entry.x() + half_width,
        y.min(0.0),
    )
}
