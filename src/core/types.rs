use serde::{Deserialize, Serialize};

/// Pixel-space target rectangle the chart projects into.
///
/// The origin is the top-left corner of the drawable content area in device
/// units; `width`/`height` are its extent. Owned by the rendering host and
/// read-only to this crate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    #[serde(default)]
    pub left: f64,
    #[serde(default)]
    pub top: f64,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width,
            height,
        }
    }

    /// Returns a copy positioned at the given pixel origin.
    #[must_use]
    pub fn with_origin(mut self, left: f64, top: f64) -> Self {
        self.left = left;
        self.top = top;
        self
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0 && self.left.is_finite() && self.top.is_finite()
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + f64::from(self.width)
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + f64::from(self.height)
    }
}

/// A point in data space: category position along X, value along Y.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle, in data units or device units depending on
/// which side of the transform it sits on.
///
/// `top`/`bottom` keep their data-space meaning through the transform: `top`
/// is the field that held the greater y-value, even though after Y inversion
/// it maps to the numerically smaller pixel row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    /// Reserved marker returned by bounds queries for entries that are not
    /// part of any bound data set. Kept at the minimum representable float
    /// for compatibility with hosts that test against it directly.
    pub const NOT_FOUND: Self = Self {
        left: f64::MIN,
        top: f64::MIN,
        right: f64::MIN,
        bottom: f64::MIN,
    };

    #[must_use]
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn set(&mut self, left: f64, top: f64, right: f64, bottom: f64) {
        self.left = left;
        self.top = top;
        self.right = right;
        self.bottom = bottom;
    }

    #[must_use]
    pub fn is_not_found(self) -> bool {
        self == Self::NOT_FOUND
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        (self.bottom - self.top).abs()
    }
}
