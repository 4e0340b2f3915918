use serde::{Deserialize, Serialize};

use crate::core::axis::AxisRange;
use crate::core::types::{DataPoint, Rect, Viewport};
use crate::error::{ChartError, ChartResult};

/// Bidirectional linear mapping between data space and pixel space.
///
/// One instance exists per Y-axis affinity; both share the X range. All
/// degenerate inputs are rejected at construction, so the mapping methods are
/// pure math that can never produce NaN or infinity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transformer {
    x_range: AxisRange,
    y_range: AxisRange,
    viewport: Viewport,
}

impl Transformer {
    /// Builds a validated transformer over the given ranges and viewport.
    pub fn new(x_range: AxisRange, y_range: AxisRange, viewport: Viewport) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if x_range.span() == 0.0 {
            return Err(ChartError::DegenerateRange(x_range.min()));
        }
        if y_range.span() == 0.0 {
            return Err(ChartError::DegenerateRange(y_range.min()));
        }

        Ok(Self {
            x_range,
            y_range,
            viewport,
        })
    }

    #[must_use]
    pub fn x_range(self) -> AxisRange {
        self.x_range
    }

    #[must_use]
    pub fn y_range(self) -> AxisRange {
        self.y_range
    }

    #[must_use]
    pub fn viewport(self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn x_value_to_pixel(self, x: f64) -> f64 {
        self.viewport.left
            + (x - self.x_range.min()) / self.x_range.span() * f64::from(self.viewport.width)
    }

    /// Maps a data-space y-value to a pixel row. The Y axis inverts: data
    /// increases upward, pixels increase downward.
    #[must_use]
    pub fn y_value_to_pixel(self, y: f64) -> f64 {
        self.viewport.top
            + (self.y_range.max() - y) / self.y_range.span() * f64::from(self.viewport.height)
    }

    #[must_use]
    pub fn pixel_to_x_value(self, pixel_x: f64) -> f64 {
        self.x_range.min()
            + (pixel_x - self.viewport.left) / f64::from(self.viewport.width) * self.x_range.span()
    }

    #[must_use]
    pub fn pixel_to_y_value(self, pixel_y: f64) -> f64 {
        self.y_range.max()
            - (pixel_y - self.viewport.top) / f64::from(self.viewport.height) * self.y_range.span()
    }

    #[must_use]
    pub fn point_to_pixel(self, point: DataPoint) -> (f64, f64) {
        (
            self.x_value_to_pixel(point.x),
            self.y_value_to_pixel(point.y),
        )
    }

    /// Exact inverse of [`Self::point_to_pixel`]; the round trip is lossless
    /// to floating-point tolerance.
    #[must_use]
    pub fn pixel_to_point(self, pixel_x: f64, pixel_y: f64) -> DataPoint {
        DataPoint::new(self.pixel_to_x_value(pixel_x), self.pixel_to_y_value(pixel_y))
    }

    /// Maps a data-space rect to pixel space.
    #[must_use]
    pub fn rect_value_to_pixel(self, rect: Rect) -> Rect {
        let mut out = rect;
        self.rect_value_to_pixel_in_place(&mut out);
        out
    }

    /// In-place form of [`Self::rect_value_to_pixel`]; the allocation-free
    /// performance path for per-frame bounds queries.
    pub fn rect_value_to_pixel_in_place(self, rect: &mut Rect) {
        rect.set(
            self.x_value_to_pixel(rect.left),
            self.y_value_to_pixel(rect.top),
            self.x_value_to_pixel(rect.right),
            self.y_value_to_pixel(rect.bottom),
        );
    }
}
