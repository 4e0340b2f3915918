use approx::assert_abs_diff_eq;
use barchart_rs::core::{AxisRange, DataPoint, Rect, Transformer, Viewport};
use barchart_rs::error::ChartError;

fn transformer(viewport: Viewport) -> Transformer {
    let x_range = AxisRange::new(0.0, 10.0).expect("x range");
    let y_range = AxisRange::new(0.0, 100.0).expect("y range");
    Transformer::new(x_range, y_range, viewport).expect("transformer")
}

#[test]
fn point_round_trip_within_tolerance() {
    let transformer = transformer(Viewport::new(1000, 600));

    let original = DataPoint::new(4.25, 33.7);
    let (px, py) = transformer.point_to_pixel(original);
    let recovered = transformer.pixel_to_point(px, py);

    assert_abs_diff_eq!(recovered.x, original.x, epsilon = 1e-9);
    assert_abs_diff_eq!(recovered.y, original.y, epsilon = 1e-9);
}

#[test]
fn y_axis_is_inverted() {
    let transformer = transformer(Viewport::new(1000, 600));

    assert_eq!(transformer.y_value_to_pixel(100.0), 0.0);
    assert_eq!(transformer.y_value_to_pixel(0.0), 600.0);
    assert_eq!(transformer.x_value_to_pixel(0.0), 0.0);
    assert_eq!(transformer.x_value_to_pixel(10.0), 1000.0);
}

#[test]
fn viewport_origin_offsets_pixel_output() {
    let transformer = transformer(Viewport::new(1000, 600).with_origin(100.0, 50.0));

    assert_eq!(transformer.x_value_to_pixel(0.0), 100.0);
    assert_eq!(transformer.x_value_to_pixel(10.0), 1100.0);
    assert_eq!(transformer.y_value_to_pixel(100.0), 50.0);
    assert_eq!(transformer.y_value_to_pixel(0.0), 650.0);
}

#[test]
fn degenerate_range_is_rejected_at_construction() {
    let viewport = Viewport::new(1000, 600);
    let flat = AxisRange::new(5.0, 5.0).expect("flat range is a valid range");
    let y_range = AxisRange::new(0.0, 1.0).expect("y range");

    let result = Transformer::new(flat, y_range, viewport);
    assert!(matches!(result, Err(ChartError::DegenerateRange(_))));

    let result = Transformer::new(y_range, flat, viewport);
    assert!(matches!(result, Err(ChartError::DegenerateRange(_))));
}

#[test]
fn invalid_viewport_is_rejected() {
    let x_range = AxisRange::new(0.0, 1.0).expect("x range");
    let y_range = AxisRange::new(0.0, 1.0).expect("y range");

    let result = Transformer::new(x_range, y_range, Viewport::new(0, 0));
    assert!(matches!(result, Err(ChartError::InvalidViewport { .. })));
}

#[test]
fn rect_in_place_form_matches_allocating_form() {
    let transformer = transformer(Viewport::new(800, 400));
    let value_rect = Rect::new(2.0, 60.0, 3.0, 0.0);

    let allocated = transformer.rect_value_to_pixel(value_rect);
    let mut in_place = value_rect;
    transformer.rect_value_to_pixel_in_place(&mut in_place);

    assert_eq!(allocated, in_place);
    assert!(allocated.left < allocated.right);
    // Data-space top (the greater y) lands on the smaller pixel row.
    assert!(allocated.top < allocated.bottom);
}

#[test]
fn rect_transform_maps_edges_through_axis_formulas() {
    let transformer = transformer(Viewport::new(1000, 600));
    let pixel = transformer.rect_value_to_pixel(Rect::new(1.0, 50.0, 2.0, 0.0));

    assert_abs_diff_eq!(pixel.left, 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(pixel.right, 200.0, epsilon = 1e-9);
    assert_abs_diff_eq!(pixel.top, 300.0, epsilon = 1e-9);
    assert_abs_diff_eq!(pixel.bottom, 600.0, epsilon = 1e-9);
}
