use barchart_rs::core::{AxisRange, DataPoint, Transformer, Viewport};
use proptest::prelude::*;

proptest! {
    #[test]
    fn pixel_round_trip_recovers_the_data_point(
        x_min in -1_000_000.0f64..1_000_000.0,
        x_span in 0.001f64..1_000_000.0,
        y_min in -1_000_000.0f64..1_000_000.0,
        y_span in 0.001f64..1_000_000.0,
        x_factor in 0.0f64..1.0,
        y_factor in 0.0f64..1.0,
        width in 1u32..4096,
        height in 1u32..4096
    ) {
        let x_range = AxisRange::new(x_min, x_min + x_span).expect("x range");
        let y_range = AxisRange::new(y_min, y_min + y_span).expect("y range");
        let viewport = Viewport::new(width, height);
        let transformer = Transformer::new(x_range, y_range, viewport).expect("transformer");

        let original = DataPoint::new(
            x_min + x_factor * x_span,
            y_min + y_factor * y_span,
        );
        let (px, py) = transformer.point_to_pixel(original);
        let recovered = transformer.pixel_to_point(px, py);

        let x_tolerance = 1e-9 * original.x.abs().max(x_span);
        let y_tolerance = 1e-9 * original.y.abs().max(y_span);
        prop_assert!((recovered.x - original.x).abs() <= x_tolerance);
        prop_assert!((recovered.y - original.y).abs() <= y_tolerance);
    }

    #[test]
    fn in_range_points_project_inside_the_viewport(
        x_factor in 0.0f64..1.0,
        y_factor in 0.0f64..1.0,
        left in -500.0f64..500.0,
        top in -500.0f64..500.0,
        width in 1u32..4096,
        height in 1u32..4096
    ) {
        let x_range = AxisRange::new(0.0, 10.0).expect("x range");
        let y_range = AxisRange::new(-5.0, 5.0).expect("y range");
        let viewport = Viewport::new(width, height).with_origin(left, top);
        let transformer = Transformer::new(x_range, y_range, viewport).expect("transformer");

        let point = DataPoint::new(10.0 * x_factor, -5.0 + 10.0 * y_factor);
        let (px, py) = transformer.point_to_pixel(point);

        let slack = 1e-9;
        prop_assert!(px >= viewport.left - slack && px <= viewport.right() + slack);
        prop_assert!(py >= viewport.top - slack && py <= viewport.bottom() + slack);
    }
}
