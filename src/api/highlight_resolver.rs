use ordered_float::OrderedFloat;
use smallvec::SmallVec;
use tracing::warn;

use crate::interaction::Highlight;

use super::BarChartEngine;

impl BarChartEngine {
    /// Resolves the entry under a pixel-space touch point.
    ///
    /// The touch is inverted through each data set's axis transformer and the
    /// entry nearest in x (by pixel distance) across all data sets wins. For
    /// stacked entries the touched segment is resolved, unless full-bar
    /// highlighting is enabled, in which case the whole bar is selected.
    ///
    /// With no data bound this is a usage error: it returns `None` and
    /// records a warning rather than failing.
    #[must_use]
    pub fn highlight_at(&self, pixel_x: f64, pixel_y: f64) -> Option<Highlight> {
        let Some(data) = self.data.as_ref() else {
            warn!("cannot select by touch, no data bound");
            return None;
        };

        let mut candidates: SmallVec<[(OrderedFloat<f64>, Highlight); 2]> = SmallVec::new();
        for (data_set_index, set) in data.data_sets().iter().enumerate() {
            let Ok(transformer) = self.transformer(set.axis_dependency()) else {
                continue;
            };

            let touch = transformer.pixel_to_point(pixel_x, pixel_y);
            let Some((_, entry)) = set.entry_nearest_to_x(touch.x) else {
                continue;
            };

            let entry_pixel_x = transformer.x_value_to_pixel(entry.x());
            let distance = OrderedFloat((entry_pixel_x - pixel_x).abs());

            let stack_index = if self.config.highlight_full_bar {
                None
            } else {
                entry.stack_index_for_value(touch.y)
            };

            candidates.push((
                distance,
                Highlight::new(entry.x(), data_set_index, stack_index),
            ));
        }

        candidates
            .into_iter()
            .min_by_key(|candidate| candidate.0)
            .map(|(_, highlight)| highlight)
    }

    /// Programmatically selects the bar at `x` in the given data set,
    /// bypassing pixel inversion.
    ///
    /// Passing a negative `data_set_index` (or one past the bound data)
    /// clears any active highlight; a negative `stack_index` selects the
    /// whole bar.
    pub fn highlight_value(&mut self, x: f64, data_set_index: i32, stack_index: i32) {
        let data_set_count = self
            .data
            .as_ref()
            .map_or(0, |data| data.data_set_count());

        if data_set_index < 0 || data_set_index as usize >= data_set_count {
            self.highlight = None;
            return;
        }

        let stack_index = usize::try_from(stack_index).ok();
        self.highlight = Some(Highlight::new(x, data_set_index as usize, stack_index));
    }

    /// Replaces the stored selection directly.
    pub fn set_highlight(&mut self, highlight: Option<Highlight>) {
        self.highlight = highlight;
    }

    pub fn clear_highlight(&mut self) {
        self.highlight = None;
    }

    /// The currently stored selection, if any.
    #[must_use]
    pub fn active_highlight(&self) -> Option<Highlight> {
        self.highlight
    }
}
