//! Data ranges and the pixel viewport.

use crate::error::PlotError;
use crate::geom::{ScreenPoint, ScreenRect};

/// Default uniform padding around the plot rectangle, in pixels.
pub const DEFAULT_PADDING: f64 = 70.0;

/// Numeric range with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    /// Minimum value.
    pub min: f64,
    /// Maximum value.
    pub max: f64,
}

impl Range {
    /// Create a new range, swapping bounds if needed.
    pub fn new(mut min: f64, mut max: f64) -> Self {
        if min > max {
            std::mem::swap(&mut min, &mut max);
        }
        Self { min, max }
    }

    /// Tightest range covering the finite values, if there are any.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut range: Option<Self> = None;
        for value in values.into_iter().filter(|value| value.is_finite()) {
            range
                .get_or_insert(Self::new(value, value))
                .expand_to_include(value);
        }
        range
    }

    /// Span of the range.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Check whether both bounds are finite.
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Check whether the range has positive span and finite bounds.
    pub fn is_valid(&self) -> bool {
        self.is_finite() && self.span() > 0.0
    }

    /// Check whether zero lies inside the range, bounds included.
    pub fn contains_zero(&self) -> bool {
        self.min <= 0.0 && 0.0 <= self.max
    }

    /// Expand the range to include a value.
    pub fn expand_to_include(&mut self, value: f64) {
        if !value.is_finite() {
            return;
        }
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }
}

/// Pixel area a plot is drawn into.
///
/// The padding applies to all four sides; the usable plot rectangle is
/// `[padding, width - padding] x [padding, height - padding]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Total width in pixels.
    pub width: f64,
    /// Total height in pixels.
    pub height: f64,
    /// Uniform padding in pixels.
    pub padding: f64,
}

impl Viewport {
    /// Create a viewport.
    pub fn new(width: f64, height: f64, padding: f64) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    /// Usable plot rectangle inside the padding.
    pub fn plot_rect(&self) -> ScreenRect {
        ScreenRect::new(
            ScreenPoint::new(self.padding, self.padding),
            ScreenPoint::new(self.width - self.padding, self.height - self.padding),
        )
    }

    /// Check that every field is finite and the plot rectangle has area.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite()
            && self.height.is_finite()
            && self.padding.is_finite()
            && self.padding >= 0.0
            && self.plot_rect().is_valid()
    }

    /// Return the viewport if valid, an error otherwise.
    pub fn validated(self) -> Result<Self, PlotError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(PlotError::InvalidViewport {
                width: self.width,
                height: self.height,
                padding: self.padding,
            })
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0, DEFAULT_PADDING)
    }
}
