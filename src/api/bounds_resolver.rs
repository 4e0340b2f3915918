use tracing::warn;

use crate::core::{BarEntry, Rect, bar_bounds_value};

use super::BarChartEngine;

impl BarChartEngine {
    /// Returns the pixel-space bounding box of `entry`.
    ///
    /// Performance-sensitive callers should prefer
    /// [`Self::bar_bounds_into`], which writes into a caller-supplied rect.
    /// Entries not found in any bound data set yield [`Rect::NOT_FOUND`].
    #[must_use]
    pub fn bar_bounds(&self, entry: &BarEntry) -> Rect {
        let mut bounds = Rect::NOT_FOUND;
        self.bar_bounds_into(entry, &mut bounds);
        bounds
    }

    /// Writes the pixel-space bounding box of `entry` into `output`.
    ///
    /// This is the allocation-free query path. When the entry cannot be
    /// found in any bound data set, `output` is set to [`Rect::NOT_FOUND`]
    /// and a warning is recorded; the call never fails.
    pub fn bar_bounds_into(&self, entry: &BarEntry, output: &mut Rect) {
        match self.locate_bounds_transformer(entry) {
            Some((bar_width, transformer)) => {
                *output = bar_bounds_value(entry, bar_width);
                transformer.rect_value_to_pixel_in_place(output);
            }
            None => {
                *output = Rect::NOT_FOUND;
            }
        }
    }

    fn locate_bounds_transformer(
        &self,
        entry: &BarEntry,
    ) -> Option<(f64, crate::core::Transformer)> {
        let Some(data) = self.data.as_ref() else {
            warn!("bar bounds queried with no data bound");
            return None;
        };

        let Some(set_index) = data.data_set_for_entry(entry) else {
            warn!(
                entry_x = entry.x(),
                entry_y = entry.y(),
                "bar bounds queried for an entry outside the bound data"
            );
            return None;
        };
        let set = data.data_set(set_index)?;
        let transformer = self.transformer(set.axis_dependency()).ok()?;
        Some((data.bar_width(), *transformer))
    }
}
