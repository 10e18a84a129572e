//! Coordinate transforms between data and screen space.

use tracing::trace;

use crate::error::{Axis, PlotError};
use crate::geom::{DataPoint, Point, ScreenPoint};
use crate::view::{Range, Viewport};

/// Linear mapping between data space and a padded pixel viewport.
///
/// Derived from a dataset and a viewport; derive a new model whenever either
/// one changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleModel {
    viewport: Viewport,
    x: Range,
    y: Range,
    x_scale: f64,
    y_scale: f64,
}

impl ScaleModel {
    /// Derive the mapping from the bounds of a dataset.
    pub fn derive(dataset: &[DataPoint], viewport: Viewport) -> Result<Self, PlotError> {
        let x = Range::from_values(dataset.iter().map(|point| point.x));
        let y = Range::from_values(dataset.iter().map(|point| point.y));
        match (x, y) {
            (Some(x), Some(y)) => Self::from_ranges(x, y, viewport),
            _ => Err(PlotError::EmptyDataset),
        }
    }

    /// Build the mapping from explicit domains.
    pub fn from_ranges(x: Range, y: Range, viewport: Viewport) -> Result<Self, PlotError> {
        let viewport = viewport.validated()?;
        if !x.is_valid() {
            return Err(PlotError::DegenerateDomain { axis: Axis::X });
        }
        if !y.is_valid() {
            return Err(PlotError::DegenerateDomain { axis: Axis::Y });
        }
        let rect = viewport.plot_rect();
        let x_scale = rect.width() / x.span();
        let y_scale = rect.height() / y.span();
        trace!(
            x_min = x.min,
            x_max = x.max,
            y_min = y.min,
            y_max = y.max,
            x_scale,
            y_scale,
            "derived scale"
        );
        Ok(Self {
            viewport,
            x,
            y,
            x_scale,
            y_scale,
        })
    }

    /// Access the viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Data domain of the X axis.
    pub fn x_range(&self) -> Range {
        self.x
    }

    /// Data domain of the Y axis.
    pub fn y_range(&self) -> Range {
        self.y
    }

    /// Pixels per data unit along X.
    pub fn x_scale(&self) -> f64 {
        self.x_scale
    }

    /// Pixels per data unit along Y.
    pub fn y_scale(&self) -> f64 {
        self.y_scale
    }

    /// Pixel column of a data X value.
    pub fn x_to_screen(&self, x: f64) -> f64 {
        self.viewport.padding + (x - self.x.min) * self.x_scale
    }

    /// Pixel row of a data Y value.
    pub fn y_to_screen(&self, y: f64) -> f64 {
        self.viewport.height - (self.viewport.padding + (y - self.y.min) * self.y_scale)
    }

    /// Map a data point into screen space.
    pub fn data_to_screen(&self, point: Point) -> ScreenPoint {
        ScreenPoint::new(self.x_to_screen(point.x), self.y_to_screen(point.y))
    }

    /// Map a screen point into data space.
    ///
    /// Points outside the viewport extrapolate linearly.
    pub fn screen_to_data(&self, point: ScreenPoint) -> Point {
        let padding = self.viewport.padding;
        Point::new(
            (point.x - padding) / self.x_scale + self.x.min,
            (self.viewport.height - point.y - padding) / self.y_scale + self.y.min,
        )
    }
}
