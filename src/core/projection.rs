#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::bounds::bar_bounds_value;
use crate::core::data::BarData;
use crate::core::data_set::AxisDependency;
use crate::core::transform::Transformer;
use crate::core::types::Rect;

/// One projected bar: its pixel-space rect plus the indices identifying the
/// entry it came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarRect {
    pub data_set_index: usize,
    pub entry_index: usize,
    pub rect: Rect,
}

/// Projects every entry of every data set to its pixel-space rect.
///
/// Rendering hosts draw from this output; bounds and highlight queries go
/// through the same data-space rule, so all three agree on the geometry.
#[must_use]
pub fn project_bar_rects(
    data: &BarData,
    left_transformer: Transformer,
    right_transformer: Transformer,
) -> Vec<BarRect> {
    // For many data sets, optional parallel projection keeps output order and
    // values identical while reducing wall-clock projection time.
    #[cfg(feature = "parallel-projection")]
    {
        let projected: Vec<Vec<BarRect>> = data
            .data_sets()
            .par_iter()
            .enumerate()
            .map(|(data_set_index, _)| {
                project_data_set(data, data_set_index, left_transformer, right_transformer)
            })
            .collect();
        projected.into_iter().flatten().collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        let mut out = Vec::with_capacity(
            data.data_sets()
                .iter()
                .map(|set| set.entry_count())
                .sum(),
        );
        for data_set_index in 0..data.data_set_count() {
            out.extend(project_data_set(
                data,
                data_set_index,
                left_transformer,
                right_transformer,
            ));
        }
        out
    }
}

fn project_data_set(
    data: &BarData,
    data_set_index: usize,
    left_transformer: Transformer,
    right_transformer: Transformer,
) -> Vec<BarRect> {
    let Some(set) = data.data_set(data_set_index) else {
        return Vec::new();
    };
    let transformer = match set.axis_dependency() {
        AxisDependency::Left => left_transformer,
        AxisDependency::Right => right_transformer,
    };

    set.entries()
        .iter()
        .enumerate()
        .map(|(entry_index, entry)| BarRect {
            data_set_index,
            entry_index,
            rect: transformer.rect_value_to_pixel(bar_bounds_value(entry, data.bar_width())),
        })
        .collect()
}
