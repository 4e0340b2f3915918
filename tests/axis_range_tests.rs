use approx::assert_abs_diff_eq;
use barchart_rs::core::{
    AxisDependency, AxisTuning, BarData, BarDataSet, BarEntry, calculate_x_range,
    calculate_y_range,
};

fn sample_data() -> BarData {
    let entries = vec![
        BarEntry::new(0.0, 4.0).expect("entry"),
        BarEntry::new(1.0, -2.0).expect("entry"),
        BarEntry::new(2.0, 7.5).expect("entry"),
    ];
    let set = BarDataSet::new("revenue", entries).expect("data set");
    BarData::new(vec![set]).expect("bar data")
}

#[test]
fn y_range_min_never_exceeds_max() {
    let data = sample_data();
    let range =
        calculate_y_range(&data, AxisDependency::Left, AxisTuning::default()).expect("range");

    assert!(range.min() <= range.max());
}

#[test]
fn tight_tuning_reproduces_data_extrema() {
    let data = sample_data();
    let range =
        calculate_y_range(&data, AxisDependency::Left, AxisTuning::tight()).expect("range");

    assert_abs_diff_eq!(range.min(), -2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(range.max(), 7.5, epsilon = 1e-9);
}

#[test]
fn default_tuning_pads_by_span_ratio() {
    let data = sample_data();
    let range =
        calculate_y_range(&data, AxisDependency::Left, AxisTuning::default()).expect("range");

    // span = 9.5, 10% head- and foot-room
    assert_abs_diff_eq!(range.min(), -2.95, epsilon = 1e-9);
    assert_abs_diff_eq!(range.max(), 8.45, epsilon = 1e-9);
}

#[test]
fn flat_y_domain_widens_to_min_span() {
    let entries = vec![
        BarEntry::new(0.0, 42.0).expect("entry"),
        BarEntry::new(1.0, 42.0).expect("entry"),
    ];
    let set = BarDataSet::new("flat", entries).expect("data set");
    let data = BarData::new(vec![set]).expect("bar data");

    let range =
        calculate_y_range(&data, AxisDependency::Left, AxisTuning::tight()).expect("range");
    assert!(range.min() < 42.0);
    assert!(range.max() > 42.0);
    assert!(range.span() > 0.0);
}

#[test]
fn fit_bars_widens_x_range_by_exactly_half_bar_width() {
    let mut data = sample_data();
    data.set_bar_width(0.8).expect("bar width");

    let unfit = calculate_x_range(&data, false).expect("unfit range");
    let fit = calculate_x_range(&data, true).expect("fit range");

    assert_abs_diff_eq!(fit.min(), unfit.min() - 0.4, epsilon = 1e-12);
    assert_abs_diff_eq!(fit.max(), unfit.max() + 0.4, epsilon = 1e-12);
}

#[test]
fn flat_x_domain_without_fit_bars_widens_by_half_slot() {
    let entries = vec![BarEntry::new(3.0, 1.0).expect("entry")];
    let set = BarDataSet::new("single", entries).expect("data set");
    let data = BarData::new(vec![set]).expect("bar data");

    let range = calculate_x_range(&data, false).expect("range");
    assert_abs_diff_eq!(range.min(), 2.5, epsilon = 1e-12);
    assert_abs_diff_eq!(range.max(), 3.5, epsilon = 1e-12);
}

#[test]
fn y_extrema_are_restricted_to_matching_axis() {
    let left = BarDataSet::new(
        "left",
        vec![BarEntry::new(0.0, 10.0).expect("entry")],
    )
    .expect("left set");
    let right = BarDataSet::with_axis(
        "right",
        vec![BarEntry::new(0.0, 1000.0).expect("entry")],
        AxisDependency::Right,
    )
    .expect("right set");
    let data = BarData::new(vec![left, right]).expect("bar data");

    let left_range =
        calculate_y_range(&data, AxisDependency::Left, AxisTuning::tight()).expect("left range");
    let right_range =
        calculate_y_range(&data, AxisDependency::Right, AxisTuning::tight()).expect("right range");

    assert!(left_range.max() < 100.0);
    assert_abs_diff_eq!(right_range.max(), 1000.0, epsilon = 1e-9);
}

#[test]
fn axis_without_data_sets_falls_back_to_opposite_axis() {
    let right_only = BarDataSet::with_axis(
        "right",
        vec![
            BarEntry::new(0.0, 5.0).expect("entry"),
            BarEntry::new(1.0, 15.0).expect("entry"),
        ],
        AxisDependency::Right,
    )
    .expect("right set");
    let data = BarData::new(vec![right_only]).expect("bar data");

    let left_range =
        calculate_y_range(&data, AxisDependency::Left, AxisTuning::tight()).expect("left range");
    let right_range =
        calculate_y_range(&data, AxisDependency::Right, AxisTuning::tight()).expect("right range");

    assert_eq!(left_range, right_range);
}

#[test]
fn stacked_entries_contribute_their_full_envelope() {
    let entries = vec![
        BarEntry::stacked(0.0, vec![2.0, 3.0]).expect("stacked entry"),
        BarEntry::stacked(1.0, vec![-4.0, 1.0]).expect("stacked entry"),
    ];
    let set = BarDataSet::new("stacked", entries).expect("data set");
    let data = BarData::new(vec![set]).expect("bar data");

    let range =
        calculate_y_range(&data, AxisDependency::Left, AxisTuning::tight()).expect("range");
    assert_abs_diff_eq!(range.min(), -4.0, epsilon = 1e-9);
    assert_abs_diff_eq!(range.max(), 5.0, epsilon = 1e-9);
}

#[test]
fn container_extrema_envelop_data_set_extrema() {
    let first = BarDataSet::new(
        "first",
        vec![
            BarEntry::new(0.0, 3.0).expect("entry"),
            BarEntry::new(1.0, 9.0).expect("entry"),
        ],
    )
    .expect("first set");
    let second = BarDataSet::new(
        "second",
        vec![
            BarEntry::new(2.0, -5.0).expect("entry"),
            BarEntry::new(3.0, 4.0).expect("entry"),
        ],
    )
    .expect("second set");
    let data = BarData::new(vec![first, second]).expect("bar data");

    for set in data.data_sets() {
        assert!(data.y_min(AxisDependency::Left) <= set.y_min());
        assert!(data.y_max(AxisDependency::Left) >= set.y_max());
        assert!(data.x_min() <= set.x_min());
        assert!(data.x_max() >= set.x_max());
    }
}
