//! Pure grouped-bar layout math.
//!
//! The mutating [`crate::core::BarData::group_bars`] operation is built on
//! top of these functions; keeping the position plan side-effect free makes
//! the layout directly testable against closed-form expectations.

/// Total x-axis width one bar group occupies.
///
/// `n` interleaved bars, `n - 1` gaps between them, plus the gap separating
/// this group from the next.
#[must_use]
pub fn group_width(data_set_count: usize, bar_width: f64, group_space: f64, bar_space: f64) -> f64 {
    let n = data_set_count as f64;
    n * bar_width + (n - 1.0).max(0.0) * bar_space + group_space
}

/// Center x-position of one bar inside a grouped layout.
///
/// `group_index` addresses the group slot (0-based from `from_x`) and
/// `data_set_index` the bar within the group.
#[must_use]
pub fn grouped_x_position(
    from_x: f64,
    group_index: usize,
    data_set_index: usize,
    data_set_count: usize,
    bar_width: f64,
    group_space: f64,
    bar_space: f64,
) -> f64 {
    let interval = group_width(data_set_count, bar_width, group_space, bar_space);
    from_x
        + group_index as f64 * interval
        + data_set_index as f64 * (bar_width + bar_space)
        + bar_width / 2.0
        + group_space / 2.0
}

/// Plans the full grouped layout without touching any entry.
///
/// `entry_counts` holds the entry count of each data set, in data-set order.
/// The result mirrors that shape: `plan[d][g]` is the new center x-position
/// of data set `d`'s entry at group slot `g`.
#[must_use]
pub fn plan_grouped_positions(
    entry_counts: &[usize],
    from_x: f64,
    bar_width: f64,
    group_space: f64,
    bar_space: f64,
) -> Vec<Vec<f64>> {
    let data_set_count = entry_counts.len();
    entry_counts
        .iter()
        .enumerate()
        .map(|(data_set_index, count)| {
            (0..*count)
                .map(|group_index| {
                    grouped_x_position(
                        from_x,
                        group_index,
                        data_set_index,
                        data_set_count,
                        bar_width,
                        group_space,
                        bar_space,
                    )
                })
                .collect()
        })
        .collect()
}
